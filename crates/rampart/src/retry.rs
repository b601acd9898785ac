//! Retry policy with exponential backoff.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use rampart_core::ApiResponse;

/// Retry budget and backoff schedule for one request.
///
/// A budget of `max_attempts` allows `max_attempts + 1` total tries. The
/// delay before retry `n` (zero-based) is `base_delay * 2^n`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryPolicy {
    pub(crate) max_attempts: u32,
    pub(crate) base_delay: Duration,
}

/// Whether a failed envelope is worth retrying.
///
/// 401/403 indicate a credential problem and other 4xx a malformed request;
/// neither can succeed on retry. 408/429 and everything outside [400,500)
/// (real 5xx plus the synthesized transport codes) are transient.
///
/// 429 gets the same exponential backoff as 5xx; a `Retry-After` header is
/// not honored.
fn is_retryable(status: u16) -> bool {
    match status {
        401 | 403 => false,
        408 | 429 => true,
        400..=499 => false,
        _ => true,
    }
}

fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt.min(16)))
}

impl RetryPolicy {
    /// Run `call` until it succeeds, fails permanently, or the budget is
    /// exhausted; the last envelope is returned in every case.
    pub(crate) async fn run<F, Fut>(&self, mut call: F) -> ApiResponse
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ApiResponse>,
    {
        let mut envelope = call().await;

        for attempt in 0..self.max_attempts {
            if envelope.success {
                return envelope;
            }
            if !is_retryable(envelope.status_code) {
                warn!(
                    status = envelope.status_code,
                    "permanent failure, not retrying"
                );
                return envelope;
            }

            let delay = backoff_delay(self.base_delay, attempt);
            warn!(
                attempt = attempt + 1,
                max_attempts = self.max_attempts,
                delay_ms = delay.as_millis() as u64,
                status = envelope.status_code,
                "request failed, retrying"
            );
            tokio::time::sleep(delay).await;

            envelope = call().await;
        }

        if !envelope.success {
            warn!(
                status = envelope.status_code,
                max_attempts = self.max_attempts,
                "request failed after all retries"
            );
        }
        envelope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    /// Run the policy against a scripted response sequence, returning the
    /// final envelope and the number of underlying calls.
    async fn run_scripted(policy: RetryPolicy, script: Vec<ApiResponse>) -> (ApiResponse, u32) {
        let calls = Cell::new(0u32);
        let result = policy
            .run(|| {
                let index = calls.get();
                calls.set(index + 1);
                let response = script[(index as usize).min(script.len() - 1)].clone();
                async move { response }
            })
            .await;
        (result, calls.get())
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_secs(1),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failures_retried_until_success() {
        let script = vec![
            ApiResponse::failure("Connection error", 503),
            ApiResponse::failure("Connection error", 503),
            ApiResponse::ok(json!({"uid": "abc"}), 200),
        ];
        let (result, calls) = run_scripted(policy(3), script).await;
        assert!(result.success);
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn auth_failure_is_terminal() {
        let script = vec![ApiResponse::failure("Unauthorized", 401)];
        let (result, calls) = run_scripted(policy(5), script).await;
        assert!(!result.success);
        assert_eq!(result.status_code, 401);
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn forbidden_is_terminal() {
        let script = vec![ApiResponse::failure("Forbidden", 403)];
        let (_, calls) = run_scripted(policy(5), script).await;
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn client_error_is_terminal() {
        let script = vec![ApiResponse::failure("Validation failed", 400)];
        let (result, calls) = run_scripted(policy(3), script).await;
        assert_eq!(result.status_code, 400);
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_is_retried() {
        let script = vec![
            ApiResponse::failure("Too many requests", 429),
            ApiResponse::ok(json!({}), 200),
        ];
        let (result, calls) = run_scripted(policy(3), script).await;
        assert!(result.success);
        assert_eq!(calls, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausted_budget_returns_last_failure() {
        let script = vec![ApiResponse::failure("Internal error", 500)];
        let (result, calls) = run_scripted(policy(2), script).await;
        assert!(!result.success);
        assert_eq!(result.status_code, 500);
        assert_eq!(result.message.as_deref(), Some("Internal error"));
        assert_eq!(calls, 3);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_budget_means_single_try() {
        let script = vec![ApiResponse::failure("Internal error", 500)];
        let (_, calls) = run_scripted(policy(0), script).await;
        assert_eq!(calls, 1);
    }

    #[test]
    fn retry_classification() {
        assert!(!is_retryable(401));
        assert!(!is_retryable(403));
        assert!(!is_retryable(400));
        assert!(!is_retryable(404));
        assert!(!is_retryable(422));
        assert!(is_retryable(408));
        assert!(is_retryable(429));
        assert!(is_retryable(500));
        assert!(is_retryable(503));
    }

    #[test]
    fn backoff_doubles_per_attempt() {
        let base = Duration::from_secs(1);
        assert_eq!(backoff_delay(base, 0), Duration::from_secs(1));
        assert_eq!(backoff_delay(base, 1), Duration::from_secs(2));
        assert_eq!(backoff_delay(base, 3), Duration::from_secs(8));
    }

    #[test]
    fn backoff_saturates_instead_of_overflowing() {
        let base = Duration::from_secs(3600);
        // Must not panic for absurd attempt counts
        let _ = backoff_delay(base, u32::MAX);
    }
}
