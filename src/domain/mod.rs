pub mod arguments;
pub mod cancel;
pub mod countdown;
pub mod cycle;
pub mod entity;
pub mod outbound;

mod app;

#[cfg(test)]
mod testing;

pub use app::Application;
pub use countdown::Outcome;
