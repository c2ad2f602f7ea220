pub mod duration;
pub mod mode;
pub mod notification;
pub mod phase;

pub use duration::{Durations, PhaseDuration};
pub use mode::{Config, RunMode};
pub use notification::NotificationMessage;
pub use phase::Phase;
