use snafu::prelude::*;

use crate::domain::countdown::Outcome;
use crate::domain::cycle::{AdvanceSnafu, CycleContext, RunCycleError};
use crate::domain::entity::Phase;

#[derive(Debug)]
#[repr(transparent)]
pub struct CycleState {
    inner: Option<CycleStateInner>,
}

impl CycleState {
    /// Creates a new [`CycleState`] that counts `first` down next.
    pub fn new(first: Phase) -> Self {
        Self {
            inner: Some(CountingState { phase: first }.into()),
        }
    }

    /// Move one step forward based on its inner state.
    pub async fn run(&mut self, context: &CycleContext) -> Result<(), RunCycleError> {
        let inner = match self.inner.take() {
            Some(inner) => inner,
            None => unreachable!("`CycleState`'s inner should not be `None`"),
        };
        self.inner = Some(inner.run(context).await?);
        Ok(())
    }

    /// Returns the outcome if this [`CycleState`] is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.inner {
            Some(CycleStateInner::Finished(FinishedState { outcome })) => Some(outcome),
            _ => None,
        }
    }
}

#[enum_dispatch::enum_dispatch]
trait StateRun {
    async fn run(self, context: &CycleContext) -> Result<CycleStateInner, RunCycleError>;
}

#[derive(Debug)]
#[enum_dispatch::enum_dispatch(StateRun)]
enum CycleStateInner {
    Counting(CountingState),
    Advancing(AdvancingState),
    Finished(FinishedState),
}

/// A phase is being counted down.
#[derive(Debug)]
struct CountingState {
    phase: Phase,
}

impl StateRun for CountingState {
    async fn run(self, context: &CycleContext) -> Result<CycleStateInner, RunCycleError> {
        let duration = context.config.durations().of(self.phase);

        let state = match context.countdown.run(self.phase, duration).await {
            Outcome::Cancelled => FinishedState {
                outcome: Outcome::Cancelled,
            }
            .into(),
            Outcome::Completed if context.config.is_single_session() => FinishedState {
                outcome: Outcome::Completed,
            }
            .into(),
            Outcome::Completed => AdvancingState {
                next: self.phase.next(),
            }
            .into(),
        };

        Ok(state)
    }
}

/// Waiting for the user, or for the auto delay, before `next` starts.
#[derive(Debug)]
struct AdvancingState {
    next: Phase,
}

impl StateRun for AdvancingState {
    async fn run(self, context: &CycleContext) -> Result<CycleStateInner, RunCycleError> {
        tokio::select! {
            biased;
            _ = context.cancel.cancelled() => {
                tracing::info!(next = %self.next, "Cancelled between phases");
                context.console.stopped(self.next);
                Ok(FinishedState { outcome: Outcome::Cancelled }.into())
            }
            res = context.advance.advance(self.next) => {
                res.context(AdvanceSnafu { next: self.next })?;
                context.console.clear();
                Ok(CountingState { phase: self.next }.into())
            }
        }
    }
}

/// Nothing is left to run.
#[derive(Debug)]
struct FinishedState {
    outcome: Outcome,
}

impl StateRun for FinishedState {
    async fn run(self, _context: &CycleContext) -> Result<CycleStateInner, RunCycleError> {
        Ok(self.into())
    }
}
