//! Per-operation deadlines.
//!
//! The provider host hands every resource operation a cancellable context.
//! [`Context`] is its counterpart here: an optional deadline that every HTTP
//! round trip is raced against. Cancellation needs no extra plumbing, since
//! dropping the future returned by any operation aborts the request.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use wiz_provider::Context;
//!
//! let ctx = Context::with_timeout(Duration::from_secs(30));
//! assert!(ctx.deadline().is_some());
//! assert!(Context::background().deadline().is_none());
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// Returned when a deadline passes before the guarded future completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("deadline exceeded")]
pub struct DeadlineExceeded;

/// An optional deadline carried through every request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Context {
    deadline: Option<Instant>,
}

impl Context {
    /// A context without a deadline.
    #[must_use]
    pub const fn background() -> Self {
        Self { deadline: None }
    }

    /// A context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context that expires at `deadline`.
    #[must_use]
    pub const fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when there is no deadline.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns `true` once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Runs `future` to completion or until the deadline passes.
    ///
    /// # Errors
    ///
    /// Returns [`DeadlineExceeded`] if the deadline elapses first.
    pub async fn run<F: Future>(&self, future: F) -> Result<F::Output, DeadlineExceeded> {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, future)
                .await
                .map_err(|_| DeadlineExceeded),
            None => Ok(future.await),
        }
    }
}
