//! Bounded polling: the synchronization primitive behind every wait in the
//! harness.
//!
//! The UI under observation animates asynchronously, so the only safe way to
//! read it is to re-probe until a condition holds. This module keeps that
//! loop explicit: a fixed re-check interval, a total timeout, and a
//! definitive success-or-timeout result. No probe result is ever cached
//! between iterations.

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Interval and total budget for one polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitConfig {
    pub timeout: Duration,
    pub interval: Duration,
}

#[derive(Error, Debug)]
pub enum WaitError<E> {
    /// The condition never became true within the budget. Carries the
    /// human-readable condition name so the failure identifies which wait
    /// was never met.
    #[error("condition never met within {waited:?}: {condition}")]
    TimedOut { condition: String, waited: Duration },

    /// A probe itself failed; propagated immediately, no further retries.
    #[error("wait probe failed: {0}")]
    Probe(E),
}

/// Repeatedly invokes `probe` until it reports the condition as met.
///
/// The probe returns `Ok(Some(value))` when the condition holds,
/// `Ok(None)` to request another round after `interval`, and `Err` to abort
/// the wait at once. The probe runs at least once even with a zero timeout.
pub async fn poll_until<T, E, F, Fut>(
    cfg: WaitConfig,
    condition: &str,
    mut probe: F,
) -> Result<T, WaitError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Option<T>, E>>,
{
    let started = Instant::now();
    let deadline = started + cfg.timeout;
    loop {
        if let Some(value) = probe().await.map_err(WaitError::Probe)? {
            log::debug!(
                "wait '{}' satisfied after {:?}",
                condition,
                started.elapsed()
            );
            return Ok(value);
        }
        if Instant::now() + cfg.interval > deadline {
            log::warn!("wait '{}' timed out after {:?}", condition, cfg.timeout);
            return Err(WaitError::TimedOut {
                condition: condition.to_string(),
                waited: cfg.timeout,
            });
        }
        tokio::time::sleep(cfg.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn quick() -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(50),
            interval: Duration::from_millis(1),
        }
    }

    #[tokio::test]
    async fn immediate_success_probes_once() {
        let calls = AtomicUsize::new(0);
        let result: Result<u32, WaitError<&str>> = poll_until(quick(), "instant", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(Some(7)) }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn succeeds_after_several_rounds() {
        let calls = AtomicUsize::new(0);
        let result: Result<usize, WaitError<&str>> = poll_until(quick(), "third time", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok((n >= 2).then_some(n)) }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn timeout_names_the_condition() {
        let result: Result<(), WaitError<&str>> =
            poll_until(quick(), "pieces to stop moving", || async { Ok(None) }).await;
        match result {
            Err(WaitError::TimedOut { condition, waited }) => {
                assert_eq!(condition, "pieces to stop moving");
                assert_eq!(waited, Duration::from_millis(50));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn probe_error_aborts_without_retry() {
        let calls = AtomicUsize::new(0);
        let result: Result<(), WaitError<&str>> = poll_until(quick(), "doomed", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("boom") }
        })
        .await;
        match result {
            Err(WaitError::Probe(msg)) => assert_eq!(msg, "boom"),
            other => panic!("expected probe error, got {other:?}"),
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_timeout_still_probes_once() {
        let cfg = WaitConfig {
            timeout: Duration::ZERO,
            interval: Duration::from_millis(1),
        };
        let result: Result<u8, WaitError<&str>> =
            poll_until(cfg, "zero budget", || async { Ok(Some(1)) }).await;
        assert_eq!(result.unwrap(), 1);
    }
}
