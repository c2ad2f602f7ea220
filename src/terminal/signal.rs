use tokio::task::JoinHandle;

use crate::domain::cancel::CancelTrigger;

/// Spawn a background task that pulls `trigger` on the first Ctrl-C.
///
/// Must be called inside a tokio runtime.
pub fn listen_ctrl_c(trigger: CancelTrigger) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C");
                trigger.cancel();
            }
            Err(err) => {
                crate::tracing_report!(err, "Could not listen for Ctrl-C");
            }
        }
    })
}
