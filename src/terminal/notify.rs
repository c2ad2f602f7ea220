use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::entity::NotificationMessage;
use crate::domain::outbound::{NotifyError, NotifyPort};

/// A [`NotifyPort`] implementation showing desktop notifications through the
/// platform's native mechanism.
#[derive(Debug, Clone)]
pub struct NotifyService {
    app_name: String,
}

impl NotifyService {
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }

    fn notification(&self, message: &NotificationMessage) -> Notification {
        let mut notification = Notification::new();
        notification
            .appname(&self.app_name)
            .summary(message.summary())
            .body(message.body());
        notification
    }
}

#[async_trait::async_trait]
impl NotifyPort for NotifyService {
    #[cfg(all(unix, not(target_os = "macos")))]
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let notification = self.notification(message);

        let _ = whatever!(
            notification.show_async().await,
            "Could not show notification",
        );
        tracing::debug!(summary = message.summary(), "Notification shown");

        Ok(())
    }

    #[cfg(not(all(unix, not(target_os = "macos"))))]
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        let notification = self.notification(message);

        // The native backends here block until the notification is delivered.
        let shown = tokio::task::spawn_blocking(move || {
            notification.show().map(drop).map_err(|err| err.to_string())
        });
        if let Err(reason) = whatever!(shown.await, "Notification task failed") {
            whatever!("Could not show notification: {reason}");
        }
        tracing::debug!(summary = message.summary(), "Notification shown");

        Ok(())
    }
}
