use crate::domain::entity::Phase;

/// Summary shared by every notification the timer emits.
pub const NOTIFICATION_TITLE: &str = "Pomodoro Timer";

/// Essential information in one desktop notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationMessage {
    summary: String,
    body: String,
}

impl NotificationMessage {
    /// The message announcing that a countdown of `phase` ran out.
    pub fn completion(phase: Phase) -> Self {
        Self {
            summary: NOTIFICATION_TITLE.to_owned(),
            body: phase.completion_message().to_owned(),
        }
    }

    /// Returns a reference to the summary of this [`NotificationMessage`].
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns a reference to the body of this [`NotificationMessage`].
    pub fn body(&self) -> &str {
        &self.body
    }
}
