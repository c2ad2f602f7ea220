use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use console::{Style, Term};
use tokio::time::Duration;

use crate::domain::entity::{NotificationMessage, Phase, PhaseDuration};
use crate::domain::outbound::ConsolePort;

/// A [`ConsolePort`] implementation drawing on a terminal.
///
/// Only the first failure to draw is logged.
#[derive(Debug)]
pub struct TerminalConsole {
    term: Term,
    failed: AtomicBool,
}

impl TerminalConsole {
    /// Creates a new [`TerminalConsole`] on standard output.
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
            failed: AtomicBool::new(false),
        }
    }

    fn emit(&self, text: &str) {
        let written = self.term.write_str(text).and_then(|()| self.term.flush());
        self.check(written);
    }

    /// Returns `true` if `result` is the first failure seen and was logged.
    fn check(&self, result: io::Result<()>) -> bool {
        match result {
            Ok(()) => false,
            Err(err) if !self.failed.swap(true, Ordering::Relaxed) => {
                crate::tracing_report!(err, "Could not draw on terminal");
                true
            }
            Err(err) => {
                tracing::trace!(%err, "Terminal still unwritable");
                false
            }
        }
    }
}

impl ConsolePort for TerminalConsole {
    fn started(&self, phase: Phase, duration: PhaseDuration) {
        self.emit(&render_started(phase, duration));
    }

    fn tick(&self, phase: Phase, remaining: Duration) {
        self.emit(&render_tick(phase, remaining));
    }

    fn completed(&self, phase: Phase) {
        self.emit(&render_completed(phase));
    }

    fn stopped(&self, phase: Phase) {
        self.emit(&render_stopped(phase));
    }

    fn prompt(&self, next: Phase) {
        self.emit(&render_prompt(next));
    }

    fn announce(&self, next: Phase, delay: Duration) {
        self.emit(&render_announce(next, delay));
    }

    fn clear(&self) {
        self.check(self.term.clear_screen());
    }

    fn fallback(&self, message: &NotificationMessage) {
        self.emit(&render_fallback(message));
    }
}

fn phase_style(phase: Phase) -> Style {
    match phase {
        Phase::Work => Style::new().red().bold(),
        Phase::Break => Style::new().green().bold(),
    }
}

fn styled_label(phase: Phase) -> String {
    phase_style(phase).apply_to(phase.label()).to_string()
}

/// Format a remaining time as `MM:SS`. Minutes are not wrapped into hours.
pub fn format_remaining(remaining: Duration) -> String {
    let seconds = remaining.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

fn render_started(phase: Phase, duration: PhaseDuration) -> String {
    format!(
        "\n🍅 {} timer started: {} minutes\nPress Ctrl+C to stop\n\n",
        styled_label(phase),
        duration.minutes()
    )
}

fn render_tick(phase: Phase, remaining: Duration) -> String {
    let clock = phase_style(phase).apply_to(format_remaining(remaining));
    format!("\r⏰ {clock} remaining")
}

fn render_completed(phase: Phase) -> String {
    format!("\n\n✅ {} session completed!\n", styled_label(phase))
}

fn render_stopped(phase: Phase) -> String {
    format!("\n\n⏹️  {} timer stopped.\n", styled_label(phase))
}

fn render_prompt(next: Phase) -> String {
    format!("\nPress Enter to start {} session...", styled_label(next))
}

fn render_announce(next: Phase, delay: Duration) -> String {
    format!(
        "\nStarting {} session in {} seconds...\n",
        styled_label(next),
        delay.as_secs()
    )
}

fn render_fallback(message: &NotificationMessage) -> String {
    format!("\n🔔 {}: {}\n", message.summary(), message.body())
}
