use std::sync::Arc;

use tokio::time::{Duration, Instant, MissedTickBehavior};

use crate::domain::cancel::CancelSignal;
use crate::domain::entity::{NotificationMessage, Phase, PhaseDuration};
use crate::domain::outbound::{ConsolePort, NotifyPort};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// How a countdown, or a whole run, came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Cancelled,
}

/// Counts one phase down second by second and notifies when it runs out.
pub struct Countdown {
    console: Arc<dyn ConsolePort>,
    notifier: Arc<dyn NotifyPort>,
    cancel: CancelSignal,
}

impl Countdown {
    /// Creates a new [`Countdown`].
    pub fn new(
        console: Arc<dyn ConsolePort>,
        notifier: Arc<dyn NotifyPort>,
        cancel: CancelSignal,
    ) -> Self {
        Self {
            console,
            notifier,
            cancel,
        }
    }

    /// Count `duration` down for `phase`.
    ///
    /// The remaining time is rendered once per second. Cancellation is
    /// checked before every tick and stops the countdown without a
    /// notification.
    pub async fn run(&self, phase: Phase, duration: PhaseDuration) -> Outcome {
        tracing::debug!(%phase, minutes = duration.minutes(), "Countdown started");
        self.console.started(phase, duration);

        let mut remaining = duration.seconds();
        let mut timer = tokio::time::interval_at(Instant::now() + ONE_SECOND, ONE_SECOND);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while remaining > 0 {
            self.console.tick(phase, Duration::from_secs(remaining));

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    tracing::info!(%phase, remaining, "Countdown cancelled");
                    self.console.stopped(phase);
                    return Outcome::Cancelled;
                }
                _ = timer.tick() => remaining -= 1,
            }
        }

        tracing::info!(%phase, "Countdown completed");
        self.console.completed(phase);
        self.notify(phase).await;
        Outcome::Completed
    }

    async fn notify(&self, phase: Phase) {
        let message = NotificationMessage::completion(phase);
        if let Err(err) = self.notifier.notify(&message).await {
            crate::tracing_report!(err, "Desktop notification failed");
            self.console.fallback(&message);
        }
    }
}
