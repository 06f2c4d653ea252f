//! Bounded retry for user-store writes.

use msg_config::RetryConfig;
use msg_store::StoreError;

use std::time::Duration;

use log::{debug, info, warn};
use tokio::time::sleep;

/// Errors that know whether another attempt could succeed
pub trait IsRetryable {
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for StoreError {
    fn is_retryable(&self) -> bool {
        StoreError::is_retryable(self)
    }
}

/// Run `operation` until it succeeds, fails permanently, or
/// `config.max_attempts` is spent.
pub async fn with_retry<F, Fut, T, E>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display + IsRetryable,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    let mut delay = config.initial_delay();

    loop {
        attempt += 1;

        let error = match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{operation_name} succeeded on attempt {attempt}");
                }
                return Ok(value);
            }
            Err(error) => error,
        };

        if !error.is_retryable() || attempt >= max_attempts {
            warn!("{operation_name} gave up after {attempt} attempt(s): {error}");
            return Err(error);
        }

        let wait = retry_wait(delay, config);
        debug!("{operation_name} attempt {attempt} failed: {error}. Retrying in {wait:?}");
        sleep(wait).await;

        delay = next_delay(delay, config);
    }
}

/// Sleep before the next attempt. Never exceeds `config.max_delay()`,
/// jitter included.
pub(crate) fn retry_wait(delay: Duration, config: &RetryConfig) -> Duration {
    let max_delay = config.max_delay();
    let delay = delay.min(max_delay);
    if !config.jitter {
        return delay;
    }
    // 0.5x..1.5x
    let factor = 0.5 + rand::random::<f64>();
    delay.mul_f64(factor).min(max_delay)
}

fn next_delay(delay: Duration, config: &RetryConfig) -> Duration {
    let grown = delay.as_secs_f64() * config.backoff_multiplier;
    Duration::from_secs_f64(grown.min(config.max_delay().as_secs_f64()))
}
