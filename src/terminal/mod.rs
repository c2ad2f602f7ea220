pub mod advance;
pub mod notify;
pub mod screen;
pub mod signal;

pub use advance::{DelayAdvance, PromptAdvance, AUTO_ADVANCE_DELAY};
pub use notify::NotifyService;
pub use screen::TerminalConsole;
pub use signal::listen_ctrl_c;
