use std::sync::Arc;

use crate::domain::cancel::CancelSignal;
use crate::domain::countdown::{Countdown, Outcome};
use crate::domain::cycle::{Cycle, CycleContext, RunCycleError};
use crate::domain::entity::Config;
use crate::domain::outbound::{AdvancePort, ConsolePort, NotifyPort};

/// Entrance to the domain logic, built from external adapters.
pub struct Application {
    config: Config,
    cycle: Cycle,
}

impl Application {
    /// Initialize the application by injecting the adapters it talks to.
    pub fn setup(
        config: Config,
        console_port: Arc<dyn ConsolePort>,
        notify_port: Arc<dyn NotifyPort>,
        advance_port: Arc<dyn AdvancePort>,
        cancel: CancelSignal,
    ) -> Self {
        let countdown = Countdown::new(Arc::clone(&console_port), notify_port, cancel.clone());
        let cycle = Cycle::new(CycleContext {
            config,
            countdown,
            advance: advance_port,
            console: console_port,
            cancel,
        });

        Self { config, cycle }
    }

    /// Run the timer. Returns once a single session completes or the user
    /// cancels.
    ///
    /// # Errors
    ///
    /// This function will return an error if the cycle could not advance.
    pub async fn run(self) -> Result<Outcome, RunCycleError> {
        let durations = self.config.durations();
        tracing::info!(
            mode = ?self.config.mode,
            auto = self.config.auto,
            work = durations.work.minutes(),
            rest = durations.rest.minutes(),
            "Timer started"
        );

        let outcome = self.cycle.run().await?;
        tracing::info!(?outcome, "Timer finished");
        Ok(outcome)
    }
}
