use tokio::sync::watch::{self, Receiver, Sender};

/// Create a connected pair of [`CancelTrigger`] and [`CancelSignal`].
pub fn channel() -> (CancelTrigger, CancelSignal) {
    let (sender, receiver) = watch::channel(false);
    (CancelTrigger { sender }, CancelSignal { receiver })
}

/// The side that requests the whole run to stop.
#[derive(Debug)]
pub struct CancelTrigger {
    sender: Sender<bool>,
}

impl CancelTrigger {
    /// Raise the flag. Every [`CancelSignal`] observes it, including those
    /// that start waiting afterwards.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }
}

/// The side observed at every suspension point of a run.
#[derive(Debug, Clone)]
pub struct CancelSignal {
    receiver: Receiver<bool>,
}

impl CancelSignal {
    /// Wait until cancellation is requested. Never resolves if the
    /// [`CancelTrigger`] is dropped without cancelling.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
