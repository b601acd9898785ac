//! The client facade: session lifecycle plus every domain operation.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use rampart_core::params::{
    AccessRuleParams, GroupParams, HostParams, InstallPolicyParams, LogQueryParams,
    NetworkParams, ServiceParams, ThreatExceptionParams,
};
use rampart_core::{ApiResponse, Error};

use crate::config::Config;
use crate::executor::Executor;
use crate::retry::RetryPolicy;
use crate::session::{SessionState, authenticate};

/// Async client for the management API.
///
/// The client owns a single session. Domain operations ensure the session
/// is valid (re-authenticating under a lock if it expired), then issue the
/// request through the retry policy. Every outcome is an [`ApiResponse`];
/// expected failures are never raised as errors.
#[derive(Debug)]
pub struct Client {
    config: Config,
    executor: Executor,
    session: Mutex<SessionState>,
}

impl Client {
    /// Create a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        let executor = Executor::new(&config)?;
        Ok(Self {
            config,
            executor,
            session: Mutex::new(SessionState::new()),
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    // ========================================================================
    // Session lifecycle
    // ========================================================================

    /// Log in with the configured credentials.
    ///
    /// On success the session is replaced wholesale; on failure any prior
    /// session is left untouched.
    #[instrument(skip(self), fields(server = %self.config.server))]
    pub async fn login(&self) -> bool {
        let mut state = self.session.lock().await;
        match authenticate(self.executor.http(), &self.config).await {
            Some(session) => {
                state.replace(session);
                true
            }
            None => false,
        }
    }

    /// Log out and discard the session.
    ///
    /// Local state is cleared even when the remote call fails; a dangling
    /// server-side session expires on its own.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> bool {
        let mut state = self.session.lock().await;
        let Some(sid) = state.sid().map(str::to_string) else {
            debug!("no active session to log out");
            return true;
        };

        let envelope = self
            .executor
            .execute(Method::POST, "/logout", Some(&sid), Some(&json!({})))
            .await;
        if !envelope.success {
            warn!(status = envelope.status_code, "logout request failed");
        }

        state.clear();
        true
    }

    /// Ensure a valid authenticated session, re-authenticating if needed.
    ///
    /// The validity check and any re-authentication happen under one lock,
    /// so concurrent operations never race to log in independently.
    pub async fn ensure_authenticated(&self) -> bool {
        let mut state = self.session.lock().await;
        if state.is_valid() {
            return true;
        }

        info!("session absent or expired, authenticating");
        match authenticate(self.executor.http(), &self.config).await {
            Some(session) => {
                state.replace(session);
                true
            }
            None => {
                state.clear();
                false
            }
        }
    }

    /// True iff a session exists and has not expired. No network I/O.
    pub async fn is_authenticated(&self) -> bool {
        self.session.lock().await.is_valid()
    }

    /// Report the current session without touching the network.
    pub async fn session_status(&self) -> ApiResponse {
        let state = self.session.lock().await;
        match state.session() {
            Some(session) => ApiResponse::ok(
                json!({
                    "authenticated": session.is_valid(),
                    "sid": session.sid(),
                    "url": session.url(),
                    "server": session.server(),
                    "domain": session.domain(),
                    "session-timeout": session.session_timeout().as_secs(),
                }),
                200,
            ),
            None => ApiResponse::failure("No active session", 404),
        }
    }

    // ========================================================================
    // Request plumbing
    // ========================================================================

    /// One HTTP call with the session header attached; touches the session
    /// activity timestamp on every outcome - reaching the network counts as
    /// activity regardless of application-level success.
    async fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResponse {
        let sid = self.session.lock().await.sid().map(str::to_string);
        let envelope = self
            .executor
            .execute(method, path, sid.as_deref(), body)
            .await;
        self.session.lock().await.touch();
        envelope
    }

    /// The authenticated-call template every domain operation follows:
    /// ensure a session, short-circuit if authentication fails, then run
    /// the request through the retry policy.
    async fn call(&self, path: &str, body: Value) -> ApiResponse {
        self.call_api(Method::POST, path, body).await
    }

    /// Generic authenticated call for operations without a dedicated
    /// wrapper.
    pub async fn call_api(&self, method: Method, path: &str, body: Value) -> ApiResponse {
        if !self.ensure_authenticated().await {
            return ApiResponse::failure("Authentication failed", 401);
        }

        let policy = RetryPolicy {
            max_attempts: self.config.retry_attempts,
            base_delay: self.config.retry_delay,
        };
        policy
            .run(|| self.execute(method.clone(), path, Some(&body)))
            .await
    }

    // ========================================================================
    // Access rules
    // ========================================================================

    /// Create a new access rule.
    pub async fn create_access_rule(&self, rule: &AccessRuleParams) -> ApiResponse {
        debug!(name = %rule.name(), layer = rule.layer(), "creating access rule");
        self.call("/add-access-rule", request_body(rule)).await
    }

    /// Modify an existing access rule by UID.
    pub async fn modify_access_rule(&self, uid: &str, rule: &AccessRuleParams) -> ApiResponse {
        debug!(uid, "modifying access rule");
        let mut body = request_body(rule);
        body["uid"] = json!(uid);
        self.call("/set-access-rule", body).await
    }

    /// Delete an access rule by UID.
    pub async fn delete_access_rule(&self, uid: &str) -> ApiResponse {
        debug!(uid, "deleting access rule");
        self.call("/delete-access-rule", json!({ "uid": uid })).await
    }

    /// Show the rulebase of an access layer.
    pub async fn show_access_rulebase(&self, layer: &str, limit: u32) -> ApiResponse {
        debug!(layer, limit, "showing access rulebase");
        self.call(
            "/show-access-rulebase",
            json!({ "name": layer, "limit": limit }),
        )
        .await
    }

    // ========================================================================
    // Objects
    // ========================================================================

    /// Create a host object.
    pub async fn create_host(&self, host: &HostParams) -> ApiResponse {
        debug!(name = %host.name(), "creating host object");
        self.call("/add-host", request_body(host)).await
    }

    /// Create a network object.
    pub async fn create_network(&self, network: &NetworkParams) -> ApiResponse {
        debug!(name = %network.name(), "creating network object");
        self.call("/add-network", request_body(network)).await
    }

    /// Create a group object.
    pub async fn create_group(&self, group: &GroupParams) -> ApiResponse {
        debug!(name = %group.name(), "creating group object");
        self.call("/add-group", request_body(group)).await
    }

    /// Create a TCP or UDP service object.
    pub async fn create_service(&self, service: &ServiceParams) -> ApiResponse {
        debug!(name = %service.name(), "creating service object");
        let path = format!("/add-service-{}", service.protocol());
        self.call(&path, request_body(service)).await
    }

    /// Delete any object by UID.
    pub async fn delete_object(&self, uid: &str) -> ApiResponse {
        debug!(uid, "deleting object");
        self.call("/delete-generic-object", json!({ "uid": uid }))
            .await
    }

    /// List objects, optionally filtered by type.
    pub async fn show_objects(&self, object_type: Option<&str>, limit: u32) -> ApiResponse {
        debug!(object_type, limit, "showing objects");
        let mut body = json!({ "limit": limit });
        if let Some(object_type) = object_type {
            body["type"] = json!(object_type);
        }
        self.call("/show-objects", body).await
    }

    // ========================================================================
    // Threat prevention
    // ========================================================================

    /// Create a threat exception.
    pub async fn create_threat_exception(
        &self,
        exception: &ThreatExceptionParams,
    ) -> ApiResponse {
        debug!(name = %exception.name(), "creating threat exception");
        self.call("/add-threat-exception", request_body(exception))
            .await
    }

    /// Delete a threat exception by UID.
    pub async fn delete_threat_exception(&self, uid: &str) -> ApiResponse {
        debug!(uid, "deleting threat exception");
        self.call("/delete-threat-exception", json!({ "uid": uid }))
            .await
    }

    // ========================================================================
    // Logs
    // ========================================================================

    /// Query traffic logs.
    pub async fn query_logs(&self, query: &LogQueryParams) -> ApiResponse {
        debug!("querying logs");
        self.call("/show-logs", request_body(query)).await
    }

    // ========================================================================
    // Policy operations
    // ========================================================================

    /// Publish pending changes, optionally to specific targets.
    pub async fn publish(&self, targets: Option<&[String]>) -> ApiResponse {
        debug!(?targets, "publishing changes");
        let mut body = json!({});
        if let Some(targets) = targets {
            body["targets"] = json!(targets);
        }
        self.call("/publish", body).await
    }

    /// Discard pending changes.
    pub async fn discard(&self) -> ApiResponse {
        debug!("discarding changes");
        self.call("/discard", json!({})).await
    }

    /// Install a policy package on gateways.
    pub async fn install_policy(&self, params: &InstallPolicyParams) -> ApiResponse {
        debug!(targets = ?params.targets(), "installing policy");
        self.call("/install-policy", request_body(params)).await
    }

    /// List security gateways and servers.
    pub async fn show_gateways(&self) -> ApiResponse {
        debug!("showing gateways");
        self.call("/show-gateways-and-servers", json!({})).await
    }
}

// Derived Serialize on plain structs; cannot fail.
fn request_body<T: Serialize>(params: &T) -> Value {
    serde_json::to_value(params).expect("request params serialize to JSON")
}
