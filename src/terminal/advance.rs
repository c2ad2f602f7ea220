use std::sync::Arc;

use snafu::prelude::*;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tokio::time::Duration;

use crate::domain::entity::Phase;
use crate::domain::outbound::{
    AdvanceError, AdvancePort, ConsolePort, InputClosedSnafu, ReadSnafu,
};

/// How long auto mode waits before the next phase starts.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_secs(3);

/// An [`AdvancePort`] implementation that waits for the user to press Enter.
pub struct PromptAdvance<R> {
    console: Arc<dyn ConsolePort>,
    lines: Mutex<Lines<R>>,
}

impl PromptAdvance<BufReader<Stdin>> {
    /// Creates a new [`PromptAdvance`] reading standard input.
    pub fn stdin(console: Arc<dyn ConsolePort>) -> Self {
        Self::new(console, BufReader::new(tokio::io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> PromptAdvance<R> {
    /// Creates a new [`PromptAdvance`] reading lines from `reader`.
    pub fn new(console: Arc<dyn ConsolePort>, reader: R) -> Self {
        Self {
            console,
            lines: Mutex::new(reader.lines()),
        }
    }
}

#[async_trait::async_trait]
impl<R> AdvancePort for PromptAdvance<R>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    async fn advance(&self, next: Phase) -> Result<(), AdvanceError> {
        self.console.prompt(next);

        let mut lines = self.lines.lock().await;
        match lines.next_line().await.context(ReadSnafu)? {
            Some(_) => Ok(()),
            None => InputClosedSnafu.fail(),
        }
    }
}

/// An [`AdvancePort`] implementation that moves on after a fixed delay.
pub struct DelayAdvance {
    console: Arc<dyn ConsolePort>,
    delay: Duration,
}

impl DelayAdvance {
    /// Creates a new [`DelayAdvance`].
    pub fn new(console: Arc<dyn ConsolePort>, delay: Duration) -> Self {
        Self { console, delay }
    }
}

#[async_trait::async_trait]
impl AdvancePort for DelayAdvance {
    async fn advance(&self, next: Phase) -> Result<(), AdvanceError> {
        self.console.announce(next, self.delay);
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
