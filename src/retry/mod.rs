//! The retry loop family.
//!
//! Each public function runs the operation until its named stop condition is
//! met and returns the terminal outcome. No function combines conditions
//! beyond what its name says; callers wanting "until success or timeout"
//! pick the variant that encodes both.

mod counted;
mod error;
mod until;

pub use counted::{
    multiple_times, multiple_times_with_delay, once, once_with_small_delay, thrice,
    thrice_with_small_delay, twice, twice_with_small_delay, SMALL_DELAY,
};
pub use error::RetryError;
pub use until::{
    until_error, until_error_or_cancel, until_error_or_timeout, until_error_with_delay,
    until_succeeded_or_cancelled_with_delay, until_success, until_success_or_cancel,
    until_success_or_timeout, until_success_with_delay,
};
