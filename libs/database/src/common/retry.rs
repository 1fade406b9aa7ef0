use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for connection attempts.
///
/// Delays grow geometrically from `first_delay` toward `max_delay`. Jitter
/// spreads out processes that were restarted at the same moment.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    pub first_delay: Duration,
    pub max_delay: Duration,
    pub factor: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            first_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            factor: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn first_delay(mut self, delay: Duration) -> Self {
        self.first_delay = delay;
        self
    }

    pub fn no_jitter(mut self) -> Self {
        self.jitter = false;
        self
    }
}

/// Run `operation` until it succeeds or the attempt budget is spent,
/// sleeping between attempts according to `config`.
///
/// The last error is returned as-is; callers decide whether it is fatal.
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let budget = config.max_attempts.max(1);
    let mut delay = config.first_delay;
    let mut attempt = 0;

    loop {
        attempt += 1;
        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(attempt, "Succeeded after retrying");
                }
                return Ok(value);
            }
            Err(e) => e,
        };

        if attempt >= budget {
            warn!(attempt, error = %error, "Giving up");
            return Err(error);
        }

        let pause = if config.jitter { jittered(delay) } else { delay };
        debug!(attempt, error = %error, pause_ms = pause.as_millis() as u64, "Attempt failed, backing off");
        tokio::time::sleep(pause).await;
        delay = delay.mul_f64(config.factor).min(config.max_delay);
    }
}

/// Scale a delay to a pseudo-random value between 50% and 100% of itself.
fn jittered(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    let raw = RandomState::new().hash_one(std::time::SystemTime::now());
    delay.mul_f64(0.5 + (raw % 512) as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn counting<T: 'static>(
        counter: Arc<AtomicU32>,
        outcomes: impl Fn(u32) -> Result<T, String>,
    ) -> impl FnMut() -> std::pin::Pin<Box<dyn Future<Output = Result<T, String>>>> {
        move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            let outcome = outcomes(n);
            Box::pin(async move { outcome })
        }
    }

    fn fast() -> RetryConfig {
        RetryConfig::default()
            .first_delay(Duration::from_millis(5))
            .no_jitter()
    }

    #[tokio::test]
    async fn test_first_attempt_success_does_not_sleep() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(counting(calls.clone(), |_| Ok("up")), fast()).await;

        assert_eq!(result.unwrap(), "up");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let result = retry_with_backoff(
            counting(calls.clone(), |n| {
                if n < 2 {
                    Err(format!("refused ({})", n))
                } else {
                    Ok("up")
                }
            }),
            fast(),
        )
        .await;

        assert_eq!(result.unwrap(), "up");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_budget_bounds_total_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), String> = retry_with_backoff(
            counting(calls.clone(), |_| Err("down".to_string())),
            fast().max_attempts(3),
        )
        .await;

        assert_eq!(result.unwrap_err(), "down");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_still_runs_once() {
        let calls = Arc::new(AtomicU32::new(0));
        let result: Result<(), String> = retry_with_backoff(
            counting(calls.clone(), |_| Err("down".to_string())),
            fast().max_attempts(0),
        )
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_jitter_stays_within_half_to_full_delay() {
        let delay = Duration::from_millis(1000);
        for _ in 0..32 {
            let j = jittered(delay);
            assert!(j >= Duration::from_millis(500));
            assert!(j <= delay);
        }
    }
}
