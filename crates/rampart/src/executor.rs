//! One-shot request execution and outcome normalization.

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use rampart_core::{ApiResponse, Error, ServerUrl};

use crate::config::Config;
use crate::session::SESSION_HEADER;

/// Issues single HTTP requests and maps every possible outcome into an
/// [`ApiResponse`]; raw transport errors never escape this type.
#[derive(Debug)]
pub(crate) struct Executor {
    http: reqwest::Client,
    server: ServerUrl,
}

/// Error-message field the management API uses in failure bodies.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl Executor {
    pub(crate) fn new(config: &Config) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("rampart/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout);

        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(|err| Error::Config {
            message: err.to_string(),
        })?;

        Ok(Self {
            http,
            server: config.server.clone(),
        })
    }

    /// The underlying HTTP client, shared with the login flow.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Perform exactly one HTTP call.
    ///
    /// The current session id, when present, is attached as a header;
    /// validity is not checked here - that is the caller's job.
    #[instrument(skip(self, sid, body), fields(server = %self.server))]
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        sid: Option<&str>,
        body: Option<&Value>,
    ) -> ApiResponse {
        let url = self.server.operation_url(path);
        debug!(%method, path, "management API request");

        let mut request = self.http.request(method, &url);
        if let Some(sid) = sid {
            request = request.header(SESSION_HEADER, sid);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => Self::map_response(response).await,
            Err(err) if err.is_timeout() => {
                warn!(path, "request timed out");
                ApiResponse::failure("Request timeout", 408)
            }
            Err(err) if err.is_connect() => {
                warn!(path, "connection failed");
                ApiResponse::failure("Connection error", 503)
            }
            Err(err) => {
                warn!(path, error = %err, "request failed");
                ApiResponse::failure(err.to_string(), 500)
            }
        }
    }

    async fn map_response(response: reqwest::Response) -> ApiResponse {
        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(text) => text,
            Err(err) => return ApiResponse::failure(err.to_string(), 500),
        };

        if status == 200 {
            match serde_json::from_str::<Value>(&text) {
                Ok(data) => ApiResponse::ok(data, status),
                // Non-JSON 200 bodies degrade to the raw text
                Err(_) => ApiResponse::ok(Value::String(text), status),
            }
        } else {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| {
                    if text.is_empty() {
                        format!("HTTP {}", status)
                    } else {
                        text
                    }
                });
            ApiResponse::failure(message, status)
        }
    }
}
