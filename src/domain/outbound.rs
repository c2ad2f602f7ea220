use std::error::Error as StdError;
use std::io::Error as IoError;

use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::{NotificationMessage, Phase, PhaseDuration};

/// A public port for emitting a notification.
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Show the message to the user outside of the terminal.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make a notification.
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError>;
}

/// An error type of the notification operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// A public port for everything the timer shows in the terminal.
///
/// Rendering is cosmetic, so implementations swallow their own failures.
#[cfg_attr(test, mockall::automock)]
pub trait ConsolePort: Send + Sync + 'static {
    /// A countdown of `phase` lasting `duration` begins.
    fn started(&self, phase: Phase, duration: PhaseDuration);

    /// Overwrite the countdown line with the remaining time.
    fn tick(&self, phase: Phase, remaining: Duration);

    /// The countdown of `phase` ran out.
    fn completed(&self, phase: Phase);

    /// The run was cancelled while `phase` was running or about to run.
    fn stopped(&self, phase: Phase);

    /// Ask the user to confirm the start of `next`.
    fn prompt(&self, next: Phase);

    /// Tell the user `next` starts by itself after `delay`.
    fn announce(&self, next: Phase, delay: Duration);

    /// Clear the visible terminal contents.
    fn clear(&self);

    /// Print a notification that could not be delivered on the desktop.
    fn fallback(&self, message: &NotificationMessage);
}

/// A public port for the step between two phases of a cycle.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait AdvancePort: Send + Sync + 'static {
    /// Return once the cycle may go on with `next`.
    ///
    /// # Errors
    ///
    /// This function will return an error if the confirmation can never
    /// arrive.
    async fn advance(&self, next: Phase) -> Result<(), AdvanceError>;
}

/// An error type of waiting between two phases.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub))]
pub enum AdvanceError {
    #[snafu(display("Standard input closed while waiting for confirmation"))]
    #[non_exhaustive]
    InputClosed,
    #[snafu(display("Could not read confirmation from standard input"))]
    #[non_exhaustive]
    Read { source: IoError },
}
