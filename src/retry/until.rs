//! Loops that run until the operation's outcome flips, a cancellation token
//! fires, or a time budget elapses.
//!
//! Shared shape: check the token (if any) at the top of the iteration, run
//! one attempt, evaluate the stop condition against its outcome, then apply
//! pacing (if any) and go again. Timeout variants start their clock at loop
//! entry and compare it only after an attempt returns, so an attempt already
//! in flight when the budget runs out is allowed to finish.

use std::thread;
use std::time::{Duration, Instant};

use super::error::RetryError;
use crate::cancel::CancelToken;

/// Runs `op` until it fails, then returns that failure.
pub fn until_error<F, E>(mut op: F) -> E
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if let Err(e) = op() {
            return e;
        }
    }
}

/// Runs `op` until it fails, sleeping `delay` after every successful attempt.
pub fn until_error_with_delay<F, E>(delay: Duration, mut op: F) -> E
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if let Err(e) = op() {
            return e;
        }
        thread::sleep(delay);
    }
}

/// Runs `op` until it fails or `token` fires, whichever comes first.
///
/// The token is checked before each attempt, so a pre-cancelled token
/// prevents any attempt from running.
pub fn until_error_or_cancel<F, E>(token: &CancelToken, mut op: F) -> RetryError<E>
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if token.is_cancelled() {
            tracing::debug!("retry loop stopped by cancellation token");
            return RetryError::Cancelled;
        }
        if let Err(e) = op() {
            return RetryError::Operation(e);
        }
    }
}

/// Runs `op` until it fails or more than `timeout` has elapsed since entry.
pub fn until_error_or_timeout<F, E>(timeout: Duration, mut op: F) -> RetryError<E>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    loop {
        if let Err(e) = op() {
            return RetryError::Operation(e);
        }
        if start.elapsed() > timeout {
            tracing::debug!(?timeout, "retry loop stopped by elapsed-time budget");
            return RetryError::TimedOut;
        }
    }
}

/// Runs `op` until it succeeds. Loops forever otherwise.
pub fn until_success<F, E>(mut op: F)
where
    F: FnMut() -> Result<(), E>,
{
    while op().is_err() {}
}

/// Runs `op` until it succeeds, sleeping `delay` after every failed attempt.
pub fn until_success_with_delay<F, E>(delay: Duration, mut op: F)
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if op().is_ok() {
            return;
        }
        thread::sleep(delay);
    }
}

/// Runs `op` until it succeeds or more than `timeout` has elapsed since
/// entry. The operation's own errors are never surfaced by this variant;
/// only the timeout is.
pub fn until_success_or_timeout<F, E>(timeout: Duration, mut op: F) -> Result<(), RetryError<E>>
where
    F: FnMut() -> Result<(), E>,
{
    let start = Instant::now();
    loop {
        if op().is_ok() {
            return Ok(());
        }
        if start.elapsed() > timeout {
            tracing::debug!(?timeout, "retry loop stopped by elapsed-time budget");
            return Err(RetryError::TimedOut);
        }
    }
}

/// Runs `op` until it succeeds or `token` fires, whichever comes first.
///
/// The token is checked before each attempt; an attempt already running is
/// never interrupted.
pub fn until_success_or_cancel<F, E>(token: &CancelToken, mut op: F) -> Result<(), RetryError<E>>
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if token.is_cancelled() {
            tracing::debug!("retry loop stopped by cancellation token");
            return Err(RetryError::Cancelled);
        }
        if op().is_ok() {
            return Ok(());
        }
    }
}

/// Like [`until_success_or_cancel`], with a pacing sleep after each failed
/// attempt. A zero `delay` means no sleep.
pub fn until_succeeded_or_cancelled_with_delay<F, E>(
    token: &CancelToken,
    delay: Duration,
    mut op: F,
) -> Result<(), RetryError<E>>
where
    F: FnMut() -> Result<(), E>,
{
    loop {
        if token.is_cancelled() {
            tracing::debug!("retry loop stopped by cancellation token");
            return Err(RetryError::Cancelled);
        }
        if op().is_ok() {
            return Ok(());
        }
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn until_error_runs_until_first_failure() {
        let mut calls = 0;
        let err = until_error(|| {
            calls += 1;
            if calls == 3 {
                Err("boom")
            } else {
                Ok(())
            }
        });
        assert_eq!(err, "boom");
        assert_eq!(calls, 3);
    }

    #[test]
    fn until_success_runs_until_first_success() {
        let mut calls = 0;
        until_success(|| {
            calls += 1;
            if calls == 3 {
                Ok(())
            } else {
                Err("not yet")
            }
        });
        assert_eq!(calls, 3);
    }

    #[test]
    fn pre_cancelled_token_prevents_all_attempts() {
        let token = CancelToken::new();
        token.cancel();
        let mut calls = 0;
        let result = until_success_or_cancel(&token, || {
            calls += 1;
            Ok::<(), &str>(())
        });
        assert_eq!(result, Err(RetryError::Cancelled));
        assert_eq!(calls, 0);
    }

    #[test]
    fn cancel_fired_during_attempt_stops_before_the_next_one() {
        // The operation fires the token on its third call; the loop notices
        // at the next loop-top, so exactly three attempts run.
        let token = CancelToken::new();
        let mut calls = 0;
        let result = until_success_or_cancel(&token, || {
            calls += 1;
            if calls == 3 {
                token.cancel();
            }
            Err("still failing")
        });
        assert_eq!(result, Err(RetryError::Cancelled));
        assert_eq!(calls, 3);
    }

    #[test]
    fn until_error_or_cancel_returns_cancellation_after_exact_count() {
        let token = CancelToken::new();
        let mut calls = 0;
        let err = until_error_or_cancel(&token, || {
            calls += 1;
            if calls == 3 {
                token.cancel();
            }
            Ok::<(), &str>(())
        });
        assert_eq!(err, RetryError::Cancelled);
        assert_eq!(calls, 3);
    }

    #[test]
    fn until_error_or_cancel_propagates_the_operation_error() {
        let token = CancelToken::new();
        let err = until_error_or_cancel(&token, || Err::<(), _>("bad"));
        assert_eq!(err, RetryError::Operation("bad"));
    }

    #[test]
    fn until_success_or_timeout_surfaces_the_timeout_not_the_op_error() {
        let result =
            until_success_or_timeout(Duration::from_millis(30), || Err::<(), _>("unreachable host"));
        assert_eq!(result, Err(RetryError::TimedOut));
    }

    #[test]
    fn until_error_or_timeout_times_out_when_op_keeps_succeeding() {
        let err = until_error_or_timeout(Duration::from_millis(30), || Ok::<(), &str>(()));
        assert_eq!(err, RetryError::TimedOut);
    }

    #[test]
    fn timeout_variant_always_runs_at_least_one_attempt() {
        // The clock starts at loop entry and is only compared after an
        // attempt, so even a zero budget gets one attempt.
        let mut calls = 0;
        let result = until_success_or_timeout(Duration::ZERO, || {
            calls += 1;
            Ok::<(), &str>(())
        });
        assert_eq!(result, Ok(()));
        assert_eq!(calls, 1);
    }
}
