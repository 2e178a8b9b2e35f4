//! Synchronous retry primitives.
//!
//! Every function here runs a caller-supplied fallible operation
//! (`FnMut() -> Result<(), E>`) in a loop on the caller's thread until one
//! stop condition is met: first success, first failure, a cancellation token
//! firing, a wall-clock budget elapsing, or a fixed attempt count running
//! out. The engine never inspects the operation's error, only the `Result`
//! discriminant, and never interrupts an attempt in flight — cancellation
//! and timeouts are observed between attempts only.
//!
//! The `net` module layers two convenience helpers on top that wait for a
//! TCP endpoint to accept connections.

pub mod cancel;
pub mod net;
pub mod retry;

pub use cancel::CancelToken;
pub use net::{connect_until_connected, connect_until_connected_or_timeout};
pub use retry::{
    multiple_times, multiple_times_with_delay, once, once_with_small_delay, thrice,
    thrice_with_small_delay, twice, twice_with_small_delay, until_error, until_error_or_cancel,
    until_error_or_timeout, until_error_with_delay, until_succeeded_or_cancelled_with_delay,
    until_success, until_success_or_cancel, until_success_or_timeout, until_success_with_delay,
    RetryError, SMALL_DELAY,
};
