//! Recording fakes shared by the tests of the domain layer.

use std::sync::{Arc, Mutex};

use snafu::prelude::*;
use tokio::time::Duration;

use crate::domain::entity::{NotificationMessage, Phase, PhaseDuration};
use crate::domain::outbound::{ConsolePort, NotifyError, NotifyPort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Started(Phase, u64),
    Tick(Phase, u64),
    Completed(Phase),
    Stopped(Phase),
    Prompt(Phase),
    Announce(Phase, u64),
    Clear,
    Fallback(NotificationMessage),
}

/// A [`ConsolePort`] that keeps a transcript instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    events: Mutex<Vec<ConsoleEvent>>,
}

impl RecordingConsole {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn ticks(&self) -> Vec<u64> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConsoleEvent::Tick(_, remaining) => Some(remaining),
                _ => None,
            })
            .collect()
    }

    pub fn started_phases(&self) -> Vec<Phase> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ConsoleEvent::Started(phase, _) => Some(phase),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ConsoleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ConsolePort for RecordingConsole {
    fn started(&self, phase: Phase, duration: PhaseDuration) {
        self.push(ConsoleEvent::Started(phase, duration.minutes()));
    }

    fn tick(&self, phase: Phase, remaining: Duration) {
        self.push(ConsoleEvent::Tick(phase, remaining.as_secs()));
    }

    fn completed(&self, phase: Phase) {
        self.push(ConsoleEvent::Completed(phase));
    }

    fn stopped(&self, phase: Phase) {
        self.push(ConsoleEvent::Stopped(phase));
    }

    fn prompt(&self, next: Phase) {
        self.push(ConsoleEvent::Prompt(next));
    }

    fn announce(&self, next: Phase, delay: Duration) {
        self.push(ConsoleEvent::Announce(next, delay.as_secs()));
    }

    fn clear(&self) {
        self.push(ConsoleEvent::Clear);
    }

    fn fallback(&self, message: &NotificationMessage) {
        self.push(ConsoleEvent::Fallback(message.clone()));
    }
}

/// A [`NotifyPort`] that stores every message it is asked to show.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<NotificationMessage>>,
    broken: bool,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// A notifier that records the attempt and then fails.
    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            messages: Mutex::default(),
            broken: true,
        })
    }

    pub fn messages(&self) -> Vec<NotificationMessage> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl NotifyPort for RecordingNotifier {
    async fn notify(&self, message: &NotificationMessage) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.clone());
        if self.broken {
            whatever!("notification server is gone");
        }
        Ok(())
    }
}
