mod state;

use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::cancel::CancelSignal;
use crate::domain::countdown::{Countdown, Outcome};
use crate::domain::entity::{Config, Phase};
use crate::domain::outbound::{AdvanceError, AdvancePort, ConsolePort};

use state::CycleState;

/// A [`CycleContext`] stores all objects relevant to a [`Cycle`].
pub struct CycleContext {
    pub config: Config,
    pub countdown: Countdown,
    pub advance: Arc<dyn AdvancePort>,
    pub console: Arc<dyn ConsolePort>,
    pub cancel: CancelSignal,
}

/// Drives the alternation of work and break phases, starting with the
/// phase the [`Config`] names, until the run is cancelled or its single
/// session completes.
pub struct Cycle {
    context: CycleContext,
    state: CycleState,
}

impl Cycle {
    /// Creates a new [`Cycle`].
    pub fn new(context: CycleContext) -> Self {
        let state = CycleState::new(context.config.first_phase());
        Self { context, state }
    }

    /// Run until an [`Outcome`] is reached.
    ///
    /// # Errors
    ///
    /// This function will return an error if waiting between two phases
    /// fails.
    pub async fn run(mut self) -> Result<Outcome, RunCycleError> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            self.state.run(&self.context).await?;
        }
    }
}

/// An error for running a [`Cycle`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum RunCycleError {
    #[snafu(display("Could not advance to the {next} phase"))]
    Advance { next: Phase, source: AdvanceError },
}
