//! Loops with a fixed attempt budget.
//!
//! `multiple_times(n, op)` makes one initial attempt plus up to `n` retries
//! (n + 1 attempts total) and, when every attempt fails, returns the error
//! from the last one. The paced variant keeps the original skip-delay rule
//! literally: the sleep fires after a failed attempt at index `i` only when
//! `i < n - 1`, so the single-retry presets never sleep at all.

use std::thread;
use std::time::Duration;

/// Pacing used by the `*_with_small_delay` presets.
pub const SMALL_DELAY: Duration = Duration::from_millis(100);

/// Runs `op` up to `times + 1` times, stopping at the first success.
/// Returns the last attempt's error if none succeeds.
pub fn multiple_times<F, E>(times: u32, mut op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut attempt = 0u32;
    loop {
        match op() {
            Ok(()) => return Ok(()),
            Err(e) if attempt == times => {
                tracing::debug!(attempts = times + 1, "retry budget exhausted");
                return Err(e);
            }
            Err(_) => attempt += 1,
        }
    }
}

/// Like [`multiple_times`], sleeping `delay` between attempts — except after
/// an attempt at index `i >= times - 1`, where the sleep is skipped.
pub fn multiple_times_with_delay<F, E>(times: u32, delay: Duration, mut op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    let mut attempt = 0u32;
    loop {
        match op() {
            Ok(()) => return Ok(()),
            Err(e) if attempt == times => {
                tracing::debug!(attempts = times + 1, "retry budget exhausted");
                return Err(e);
            }
            Err(_) => {}
        }
        if attempt + 1 < times && !delay.is_zero() {
            thread::sleep(delay);
        }
        attempt += 1;
    }
}

/// Runs `op` and retries it once if it fails.
pub fn once<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times(1, op)
}

/// Runs `op` and retries it once if it fails, with [`SMALL_DELAY`] pacing.
pub fn once_with_small_delay<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times_with_delay(1, SMALL_DELAY, op)
}

/// Runs `op` and retries it up to twice if it fails.
pub fn twice<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times(2, op)
}

/// Runs `op` and retries it up to twice if it fails, with [`SMALL_DELAY`] pacing.
pub fn twice_with_small_delay<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times_with_delay(2, SMALL_DELAY, op)
}

/// Runs `op` and retries it up to three times if it fails.
pub fn thrice<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times(3, op)
}

/// Runs `op` and retries it up to three times if it fails, with [`SMALL_DELAY`] pacing.
pub fn thrice_with_small_delay<F, E>(op: F) -> Result<(), E>
where
    F: FnMut() -> Result<(), E>,
{
    multiple_times_with_delay(3, SMALL_DELAY, op)
}
