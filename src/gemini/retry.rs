//! Bounded retry with full exponential backoff and jitter.

use rand::Rng;
use std::time::Duration;

use super::error::{ApiError, RetryExhausted};

pub const DEFAULT_MAX_RETRIES: u32 = 3;

const BASE_DELAY_MS: u64 = 1000;
const JITTER_MS: u64 = 1000;

/// Runs `attempt` up to `max_retries` times, sleeping between failures.
///
/// The delay after failed attempt `i` (0-indexed) is `2^i * 1000ms` plus a
/// random jitter below one second; the doubling is uncapped. No delay follows
/// the final failure. Every failure class is retried the same way, including
/// statuses that will never succeed (an auth error burns all attempts) —
/// callers get at most `max_retries` requests on the wire, no more.
///
/// # Errors
///
/// Returns [`RetryExhausted`] wrapping the last attempt's error once the
/// attempt budget is spent.
pub async fn fetch_with_retry<T, F, Fut>(
    max_retries: u32,
    mut attempt: F,
) -> Result<T, RetryExhausted>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let attempts = max_retries.max(1);
    let mut last_error: Option<ApiError> = None;

    for i in 0..attempts {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                last_error = Some(error);
                if i + 1 < attempts {
                    tokio::time::sleep(backoff_delay(i)).await;
                }
            }
        }
    }

    // The loop above always runs at least once, so last_error is set.
    let source = last_error.unwrap_or_else(|| ApiError::Status {
        status: 0,
        message: "no attempt was made".to_string(),
    });
    Err(RetryExhausted { attempts, source })
}

fn backoff_delay(attempt: u32) -> Duration {
    let exponential = BASE_DELAY_MS.saturating_mul(1_u64 << attempt.min(62));
    let jitter = rand::thread_rng().gen_range(0..JITTER_MS);
    Duration::from_millis(exponential.saturating_add(jitter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    fn failed_attempt<T>() -> Result<T, ApiError> {
        Err(ApiError::Status {
            status: 500,
            message: "HTTP error: 500".to_string(),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_exactly_max_retries_attempts() {
        let calls = Cell::new(0_u32);

        let result: Result<(), _> = fetch_with_retry(3, || {
            calls.set(calls.get() + 1);
            async { failed_attempt() }
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(calls.get(), 3);
        assert_eq!(err.attempts, 3);
        assert!(err.to_string().contains("HTTP error: 500"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_waits_at_least_the_exponential_floor() {
        let started = Instant::now();

        let result: Result<(), _> =
            fetch_with_retry(3, || async { failed_attempt() }).await;
        assert!(result.is_err());

        // Two sleeps: 1000ms + 2000ms, each with jitter below 1000ms.
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(3000));
        assert!(elapsed < Duration::from_millis(5000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_delay_after_final_failure() {
        let started = Instant::now();

        let result: Result<(), _> =
            fetch_with_retry(1, || async { failed_attempt() }).await;

        assert!(result.is_err());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_later_attempt_stops_retrying() {
        let calls = Cell::new(0_u32);

        let result = fetch_with_retry(5, || {
            calls.set(calls.get() + 1);
            let call = calls.get();
            async move {
                if call < 2 {
                    failed_attempt()
                } else {
                    Ok("ok")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "ok");
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_makes_one_attempt() {
        let calls = Cell::new(0_u32);

        let result = fetch_with_retry(3, || {
            calls.set(calls.get() + 1);
            async { Ok::<_, ApiError>(42) }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_backoff_delay_doubles_per_attempt() {
        for attempt in 0..4 {
            let floor = Duration::from_millis(1000 * (1 << attempt));
            let delay = backoff_delay(attempt);
            assert!(delay >= floor);
            assert!(delay < floor + Duration::from_millis(JITTER_MS));
        }
    }
}
