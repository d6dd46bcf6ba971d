//! Bounded retry for collaborator calls.
//!
//! Every call to a creative collaborator goes through [`call_with_retry`]:
//! a per-call deadline, then exponential backoff with jitter for failures
//! the error taxonomy classifies as transient. Permanent failures (schema
//! violations, bad requests) propagate on the first attempt.

use crate::config::PipelineSettings;
use fumetto_error::{CollaboratorError, CollaboratorErrorKind, FumettoError, FumettoResult};
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::{jitter, ExponentialBackoff};
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// Backoff and deadline parameters for one class of collaborator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Initial backoff in milliseconds
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in seconds
    pub max_delay_secs: u64,
    /// Transient retries before the error propagates
    pub transient_retries: usize,
    /// Per-call deadline in seconds
    pub call_timeout_secs: u64,
}

impl From<&PipelineSettings> for RetryPolicy {
    fn from(settings: &PipelineSettings) -> Self {
        Self {
            initial_backoff_ms: settings.backoff_initial_ms,
            max_delay_secs: settings.backoff_max_delay_secs,
            transient_retries: settings.transient_retries,
            call_timeout_secs: settings.call_timeout_secs,
        }
    }
}

/// Run `op` under the policy's deadline, retrying transient failures with
/// exponential backoff.
///
/// A call that outlives the deadline is abandoned and counted as a
/// transient failure, identical to a 5xx from the collaborator.
///
/// # Errors
///
/// Returns the last error once retries are exhausted, or the first
/// permanent error immediately.
pub async fn call_with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> FumettoResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = FumettoResult<T>>,
{
    let strategy = ExponentialBackoff::from_millis(policy.initial_backoff_ms)
        .factor(2)
        .max_delay(Duration::from_secs(policy.max_delay_secs))
        .map(jitter)
        .take(policy.transient_retries);

    let deadline = Duration::from_secs(policy.call_timeout_secs);
    Retry::spawn(strategy, || {
        let fut = op();
        async move {
            match tokio::time::timeout(deadline, fut).await {
                Err(_) => {
                    let err: FumettoError =
                        CollaboratorError::new(CollaboratorErrorKind::Timeout(deadline.as_secs()))
                            .into();
                    warn!(timeout_secs = deadline.as_secs(), "Collaborator call timed out, will retry");
                    Err(RetryError::Transient {
                        err,
                        retry_after: None,
                    })
                }
                Ok(Ok(value)) => Ok(value),
                Ok(Err(err)) => {
                    if err.kind().is_retryable() {
                        warn!(error = %err, "Transient collaborator failure, will retry");
                        Err(RetryError::Transient {
                            err,
                            retry_after: None,
                        })
                    } else {
                        Err(RetryError::Permanent(err))
                    }
                }
            }
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn policy() -> RetryPolicy {
        RetryPolicy {
            initial_backoff_ms: 1,
            max_delay_secs: 1,
            transient_retries: 3,
            call_timeout_secs: 5,
        }
    }

    fn transient() -> FumettoError {
        CollaboratorError::new(CollaboratorErrorKind::Http {
            status_code: 503,
            message: "overloaded".to_string(),
        })
        .into()
    }

    fn permanent() -> FumettoError {
        CollaboratorError::new(CollaboratorErrorKind::Http {
            status_code: 400,
            message: "bad request".to_string(),
        })
        .into()
    }

    #[tokio::test]
    async fn transient_failures_are_retried_until_success() {
        let calls = AtomicUsize::new(0);
        let result = call_with_retry(&policy(), || {
            let attempt = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt < 2 {
                    Err(transient())
                } else {
                    Ok(42)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn permanent_failure_is_not_retried() {
        let calls = AtomicUsize::new(0);
        let result: FumettoResult<()> = call_with_retry(&policy(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(permanent()) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_are_bounded() {
        let calls = AtomicUsize::new(0);
        let result: FumettoResult<()> = call_with_retry(&policy(), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(transient()) }
        })
        .await;
        assert!(result.is_err());
        // First attempt plus the configured retries
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn slow_call_times_out_as_transient() {
        let policy = RetryPolicy {
            call_timeout_secs: 0,
            transient_retries: 1,
            ..policy()
        };
        let calls = AtomicUsize::new(0);
        let result: FumettoResult<()> = call_with_retry(&policy, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            }
        })
        .await;
        let err = result.unwrap_err();
        assert!(format!("{err}").contains("timed out"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
