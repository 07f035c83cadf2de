//! Per-view query state.
//!
//! Every view that loads data owns one [`Query`] per load. It moves through
//! `Idle → Loading → Loaded | Failed`, and a failed query can be run again,
//! which passes back through `Loading`. A query never holds partial results:
//! a composite load either settles with all of its data or with the first error.

use crate::error::{DirhubError, Result};
use std::future::Future;
use tracing::debug;

#[derive(Debug, Default)]
pub enum QueryState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(DirhubError),
}

impl<T> QueryState<T> {
    pub fn name(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Loading => "loading",
            QueryState::Loaded(_) => "loaded",
            QueryState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Default)]
pub struct Query<T> {
    state: QueryState<T>,
    attempts: u32,
}

impl<T> Query<T> {
    pub fn new() -> Self {
        Self {
            state: QueryState::Idle,
            attempts: 0,
        }
    }

    pub fn state(&self) -> &QueryState<T> {
        &self.state
    }

    /// Number of times the query has been started.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            QueryState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DirhubError> {
        match &self.state {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Enter `Loading`, dropping whatever the previous attempt produced.
    pub fn begin(&mut self) {
        self.attempts += 1;
        self.state = QueryState::Loading;
    }

    /// Record the outcome of the current attempt.
    pub fn settle(&mut self, outcome: Result<T>) {
        self.state = match outcome {
            Ok(data) => QueryState::Loaded(data),
            Err(err) => {
                debug!(error = %err, attempt = self.attempts, "query failed");
                QueryState::Failed(err)
            }
        };
    }

    /// Run `load` as a fresh attempt and settle with its outcome.
    pub async fn run<F>(&mut self, load: F) -> &QueryState<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.begin();
        let outcome = load.await;
        self.settle(outcome);
        &self.state
    }

    pub fn into_result(self) -> Option<Result<T>> {
        match self.state {
            QueryState::Loaded(data) => Some(Ok(data)),
            QueryState::Failed(err) => Some(Err(err)),
            QueryState::Idle | QueryState::Loading => None,
        }
    }
}
