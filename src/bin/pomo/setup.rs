use std::sync::Arc;

use pomo::domain::cancel;
use pomo::domain::entity::Config;
use pomo::domain::outbound::{AdvancePort, ConsolePort};
use pomo::domain::Application;
use pomo::terminal::{
    listen_ctrl_c, DelayAdvance, NotifyService, PromptAdvance, TerminalConsole,
    AUTO_ADVANCE_DELAY,
};
use snafu::{prelude::*, Whatever};
use tracing::Level;

const APP_NAME: &str = "pomo";

pub fn logger(verbosity: Level) -> Result<(), Whatever> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(verbosity)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;
    Ok(())
}

pub fn bootstrap(config: Config) -> Application {
    let (trigger, signal) = cancel::channel();
    listen_ctrl_c(trigger);

    let console: Arc<dyn ConsolePort> = Arc::new(TerminalConsole::stdout());
    let notify_port = Arc::new(NotifyService::new(APP_NAME.to_owned()));

    let advance_port: Arc<dyn AdvancePort> = if config.auto {
        Arc::new(DelayAdvance::new(Arc::clone(&console), AUTO_ADVANCE_DELAY))
    } else {
        Arc::new(PromptAdvance::stdin(Arc::clone(&console)))
    };

    Application::setup(config, console, notify_port, advance_port, signal)
}
