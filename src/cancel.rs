//! Cooperative cancellation token observed by the retry loops.
//!
//! The token is a clonable handle over a shared flag; whoever owns a clone
//! can fire it, and the loops only ever read it — once per iteration, before
//! starting the next attempt. A token can also be armed with a deadline at
//! construction, which makes it report cancelled once the deadline passes
//! without any background timer thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation signal. Cheap to clone; all clones observe the same
/// flag. The retry loops hold a reference and never fire it themselves.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    fired: AtomicBool,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that only fires when [`cancel`](Self::cancel) is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that additionally fires on its own once `timeout` has elapsed
    /// from the moment of construction.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                fired: AtomicBool::new(false),
                deadline: Some(Instant::now() + timeout),
            }),
        }
    }

    /// Fire the token. Idempotent; a fired token never resets.
    pub fn cancel(&self) {
        self.inner.fired.store(true, Ordering::Relaxed);
    }

    /// True once the token has been fired or its deadline (if any) passed.
    pub fn is_cancelled(&self) -> bool {
        if self.inner.fired.load(Ordering::Relaxed) {
            return true;
        }
        match self.inner.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}
