//! Per-request correlation id.
//!
//! The trace middleware gives each request a fresh [`TraceId`] and runs the
//! handler inside [`TraceId::scope`]. [`crate::domain::Error`] reads it back
//! with [`TraceId::current`], so error payloads and the `trace-id` header
//! carry the same value. Spawned tasks start outside the scope.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task::futures::TaskLocalFuture;
use tokio::task_local;
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static CURRENT: TraceId;
}

/// Random UUID naming one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Identifier of the request the running task belongs to.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|id| *id).ok()
    }

    /// Drive `fut` with `self` as the current identifier.
    ///
    /// ```
    /// use roster_backend::domain::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id = TraceId::generate();
    /// assert_eq!(id.scope(async { TraceId::current() }).await, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub fn scope<F: Future>(self, fut: F) -> TaskLocalFuture<TraceId, F> {
        CURRENT.scope(self, fut)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
