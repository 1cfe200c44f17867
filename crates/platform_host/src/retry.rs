//! Bounded retry with exponential backoff for best-effort host requests.

use std::{future::Future, pin::Pin, time::Duration};

/// Object-safe boxed future used by [`DelayService`].
pub type DelayFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host timer used to wait between retry attempts.
pub trait DelayService {
    /// Resolves after `duration` has elapsed.
    fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Delay service that resolves immediately.
pub struct NoopDelayService;

impl DelayService for NoopDelayService {
    fn sleep<'a>(&'a self, _duration: Duration) -> DelayFuture<'a> {
        Box::pin(async {})
    }
}

/// Retry budget and backoff curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first attempt fails.
    pub max_retries: u32,
    /// Wait before the first retry.
    pub initial_delay: Duration,
    /// Factor applied to the wait after each failed retry.
    pub backoff_multiplier: u32,
    /// Upper bound for any single wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_millis(1_000),
            backoff_multiplier: 2,
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Total number of attempts including the first one.
    pub const fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Wait applied before retry number `retry` (zero-based).
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let mut delay = self.initial_delay;
        for _ in 0..retry {
            delay = delay.saturating_mul(self.backoff_multiplier);
            if delay >= self.max_delay {
                return self.max_delay;
            }
        }
        delay.min(self.max_delay)
    }

    /// Every wait the policy may apply, in order.
    pub fn delay_schedule(&self) -> Vec<Duration> {
        (0..self.max_retries)
            .map(|retry| self.delay_for_retry(retry))
            .collect()
    }
}

/// Runs `operation` until it succeeds or the retry budget is exhausted.
///
/// `operation` receives the zero-based attempt index. Between failed attempts the call waits on
/// `delay` following `policy`. Returns the first success, or the error of the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    delay: &dyn DelayService,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt = 0;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= policy.max_retries => return Err(err),
            Err(_) => {
                delay.sleep(policy.delay_for_retry(attempt)).await;
                attempt += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingDelay {
        waits: RefCell<Vec<Duration>>,
    }

    impl DelayService for RecordingDelay {
        fn sleep<'a>(&'a self, duration: Duration) -> DelayFuture<'a> {
            self.waits.borrow_mut().push(duration);
            Box::pin(async {})
        }
    }

    #[test]
    fn default_policy_doubles_from_one_second() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 6);
        assert_eq!(
            policy.delay_schedule(),
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
                Duration::from_secs(16),
            ]
        );
    }

    #[test]
    fn delays_are_capped() {
        let policy = RetryPolicy {
            max_retries: 4,
            initial_delay: Duration::from_millis(500),
            backoff_multiplier: 10,
            max_delay: Duration::from_secs(10),
        };
        assert_eq!(
            policy.delay_schedule(),
            vec![
                Duration::from_millis(500),
                Duration::from_secs(5),
                Duration::from_secs(10),
                Duration::from_secs(10),
            ]
        );
    }

    #[test]
    fn first_success_skips_waiting() {
        let delay = RecordingDelay::default();
        let result: Result<&str, ()> = block_on(retry_with_backoff(
            &RetryPolicy::default(),
            &delay,
            |_| async { Ok("ok") },
        ));
        assert_eq!(result, Ok("ok"));
        assert!(delay.waits.borrow().is_empty());
    }

    #[test]
    fn recovers_after_transient_failures() {
        let delay = RecordingDelay::default();
        let calls = Cell::new(0u32);
        let result = block_on(retry_with_backoff(
            &RetryPolicy::default(),
            &delay,
            |attempt| {
                calls.set(calls.get() + 1);
                async move {
                    if attempt < 2 {
                        Err(format!("attempt {attempt} failed"))
                    } else {
                        Ok(attempt)
                    }
                }
            },
        ));
        assert_eq!(result, Ok(2));
        assert_eq!(calls.get(), 3);
        assert_eq!(
            *delay.waits.borrow(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[test]
    fn exhausted_budget_returns_last_error() {
        let delay = RecordingDelay::default();
        let policy = RetryPolicy {
            max_retries: 2,
            initial_delay: Duration::from_millis(10),
            backoff_multiplier: 3,
            max_delay: Duration::from_secs(1),
        };
        let result: Result<(), u32> =
            block_on(retry_with_backoff(&policy, &delay, |attempt| async move {
                Err(attempt)
            }));
        assert_eq!(result, Err(2));
        assert_eq!(
            *delay.waits.borrow(),
            vec![Duration::from_millis(10), Duration::from_millis(30)]
        );
    }

    #[test]
    fn zero_retries_means_single_attempt() {
        let delay = RecordingDelay::default();
        let policy = RetryPolicy {
            max_retries: 0,
            ..RetryPolicy::default()
        };
        let result: Result<(), &str> =
            block_on(retry_with_backoff(&policy, &delay, |_| async { Err("down") }));
        assert_eq!(result, Err("down"));
        assert!(delay.waits.borrow().is_empty());
    }
}
