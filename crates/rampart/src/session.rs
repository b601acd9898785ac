//! Session state and the two login flows.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument, warn};

use rampart_core::AuthMethod;

use crate::config::Config;

/// Header carrying the session id on every authenticated request.
pub(crate) const SESSION_HEADER: &str = "X-mgmt-sid";

/// Extra header for hosted tenants, sent on login only.
const INFRA_TOKEN_HEADER: &str = "X-cloud-infra-token";

const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 3600;

/// An authenticated session obtained from a successful login.
///
/// A session is either fully populated or absent; there is no partially
/// initialized state. It is replaced wholesale on re-authentication and
/// discarded on logout.
pub(crate) struct Session {
    sid: String,
    url: String,
    domain: String,
    server: String,
    session_timeout: Duration,
    last_activity: Instant,
}

impl Session {
    pub(crate) fn sid(&self) -> &str {
        &self.sid
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn domain(&self) -> &str {
        &self.domain
    }

    pub(crate) fn server(&self) -> &str {
        &self.server
    }

    pub(crate) fn session_timeout(&self) -> Duration {
        self.session_timeout
    }

    /// True while the declared timeout has not elapsed since the last
    /// activity. Pure; performs no I/O.
    pub(crate) fn is_valid(&self) -> bool {
        self.last_activity.elapsed() < self.session_timeout
    }

    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }
}

// Session ids grant access; keep them out of logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("sid", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("server", &self.server)
            .field("session_timeout", &self.session_timeout)
            .finish()
    }
}

/// Holder for the client's single optional session.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True iff a session exists and its timeout has not elapsed.
    pub(crate) fn is_valid(&self) -> bool {
        self.current.as_ref().is_some_and(Session::is_valid)
    }

    /// Record activity on the current session, if any.
    pub(crate) fn touch(&mut self) {
        if let Some(session) = &mut self.current {
            session.touch();
        }
    }

    /// Discard the current session.
    pub(crate) fn clear(&mut self) {
        self.current = None;
    }

    /// Replace the current session wholesale.
    pub(crate) fn replace(&mut self, session: Session) {
        self.current = Some(session);
    }

    pub(crate) fn sid(&self) -> Option<&str> {
        self.current.as_ref().map(Session::sid)
    }

    pub(crate) fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    sid: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default, rename = "api-server-name", alias = "server")]
    server: Option<String>,
    #[serde(default, rename = "session-timeout")]
    session_timeout: Option<u64>,
}

/// Exchange the configured long-lived credentials for a session.
///
/// One POST to the login endpoint, no retries; a failed login is reported
/// once (as `None`) and retrying is the caller's decision.
#[instrument(skip(http, config), fields(server = %config.server))]
pub(crate) async fn authenticate(http: &reqwest::Client, config: &Config) -> Option<Session> {
    let url = config.server.operation_url("/login");

    let request = match &config.auth {
        AuthMethod::ApiKey {
            api_key,
            infra_token,
        } => {
            let body = json!({
                "api-key": api_key,
                "session-timeout": DEFAULT_SESSION_TIMEOUT_SECS,
            });
            let mut request = http.post(&url).json(&body);
            if let Some(token) = infra_token {
                request = request.header(INFRA_TOKEN_HEADER, token);
            }
            request
        }
        AuthMethod::Password {
            username,
            password,
            domain,
        } => {
            let mut body = json!({
                "user": username,
                "password": password,
            });
            if let Some(domain) = domain {
                body["domain"] = json!(domain);
            }
            http.post(&url).json(&body)
        }
    };

    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "login request failed");
            return None;
        }
    };

    let status = response.status().as_u16();
    if status != 200 {
        warn!(status, "login rejected");
        return None;
    }

    let body: LoginResponse = match response.json().await {
        Ok(body) => body,
        Err(err) => {
            warn!(error = %err, "login response not parseable");
            return None;
        }
    };

    let Some(sid) = body.sid else {
        warn!("login response missing session id");
        return None;
    };

    let timeout_secs = body.session_timeout.unwrap_or(DEFAULT_SESSION_TIMEOUT_SECS);
    let domain = body.domain.unwrap_or_else(|| match &config.auth {
        AuthMethod::Password {
            domain: Some(domain),
            ..
        } => domain.clone(),
        _ => String::new(),
    });

    info!(domain = %domain, timeout_secs, "authenticated");

    Some(Session {
        sid,
        url: body
            .url
            .unwrap_or_else(|| config.server.as_str().to_string()),
        domain,
        server: body.server.unwrap_or_default(),
        session_timeout: Duration::from_secs(timeout_secs),
        last_activity: Instant::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with_timeout(timeout: Duration) -> Session {
        Session {
            sid: "S1".to_string(),
            url: "https://mgmt.example.com/".to_string(),
            domain: "dmz".to_string(),
            server: "mgmt-01".to_string(),
            session_timeout: timeout,
            last_activity: Instant::now(),
        }
    }

    #[test]
    fn empty_state_is_invalid() {
        let state = SessionState::new();
        assert!(!state.is_valid());
        assert!(state.sid().is_none());
    }

    #[test]
    fn fresh_session_is_valid() {
        let mut state = SessionState::new();
        state.replace(session_with_timeout(Duration::from_secs(600)));
        assert!(state.is_valid());
        assert_eq!(state.sid(), Some("S1"));
    }

    #[test]
    fn zero_timeout_session_is_expired() {
        let mut state = SessionState::new();
        state.replace(session_with_timeout(Duration::ZERO));
        assert!(!state.is_valid());
    }

    #[test]
    fn cleared_state_is_invalid() {
        let mut state = SessionState::new();
        state.replace(session_with_timeout(Duration::from_secs(600)));
        state.clear();
        assert!(!state.is_valid());
        assert!(state.session().is_none());
    }

    #[test]
    fn touch_moves_last_activity_forward() {
        let mut session = session_with_timeout(Duration::from_secs(600));
        let before = session.last_activity;
        session.touch();
        let after = session.last_activity;
        assert!(after >= before);
        session.touch();
        assert!(session.last_activity >= after);
    }

    #[test]
    fn replace_swaps_session_wholesale() {
        let mut state = SessionState::new();
        state.replace(session_with_timeout(Duration::from_secs(600)));
        let mut second = session_with_timeout(Duration::from_secs(300));
        second.sid = "S2".to_string();
        state.replace(second);
        assert_eq!(state.sid(), Some("S2"));
    }

    #[test]
    fn debug_hides_session_id() {
        let session = session_with_timeout(Duration::from_secs(600));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("S1"));
        assert!(debug.contains("[REDACTED]"));
    }
}
