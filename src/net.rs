//! Waiting for a TCP endpoint to accept connections.
//!
//! Each attempt dials `address:port` and, on success, drops the stream
//! straight away — the point is to observe that something is listening, not
//! to hand the caller a connection. No pooling or reuse.

use std::io;
use std::net::TcpStream;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::retry::{until_success, until_success_or_cancel, RetryError};

/// One connection attempt. The stream is closed as soon as it is dropped.
fn dial(address: &str, port: u16) -> io::Result<()> {
    TcpStream::connect((address, port)).map(drop)
}

/// Blocks until a TCP connection to `address:port` succeeds, retrying the
/// dial with no pause in between. Loops forever if nothing ever listens.
pub fn connect_until_connected(address: &str, port: u16) {
    tracing::debug!(address, port, "waiting for tcp endpoint");
    until_success(|| dial(address, port));
}

/// Retries the dial until it succeeds or `timeout` elapses, in which case
/// the timer token's cancellation error is returned.
pub fn connect_until_connected_or_timeout(
    timeout: Duration,
    address: &str,
    port: u16,
) -> Result<(), RetryError<io::Error>> {
    tracing::debug!(address, port, ?timeout, "waiting for tcp endpoint");
    let token = CancelToken::with_timeout(timeout);
    until_success_or_cancel(&token, || dial(address, port))
}
