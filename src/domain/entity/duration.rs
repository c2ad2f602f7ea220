use snafu::prelude::*;

use crate::domain::entity::Phase;

/// Default length of a [`Work`] countdown in minutes.
///
/// [`Work`]: Phase::Work
pub const DEFAULT_WORK_MINUTES: u64 = 60;

/// Default length of a [`Break`] countdown in minutes.
///
/// [`Break`]: Phase::Break
pub const DEFAULT_BREAK_MINUTES: u64 = 10;

/// The length of one phase, kept in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhaseDuration {
    minutes: u64,
}

impl PhaseDuration {
    /// Try to create a [`PhaseDuration`] from a number of minutes.
    ///
    /// # Errors
    ///
    /// This function will return an error if the number is not positive or
    /// the duration in seconds does not fit in a `u64`.
    pub fn try_new(minutes: i64) -> Result<Self, TryNewPhaseDurationError> {
        ensure!(minutes > 0, NonPositiveSnafu { minutes });
        let minutes = minutes.unsigned_abs();
        ensure!(minutes.checked_mul(60).is_some(), TooLongSnafu { minutes });
        Ok(Self { minutes })
    }

    /// Returns the number of minutes of this [`PhaseDuration`].
    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    /// Returns the number of one-second ticks of this [`PhaseDuration`].
    pub fn seconds(&self) -> u64 {
        self.minutes * 60
    }
}

/// An error type of creating a [`PhaseDuration`].
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum TryNewPhaseDurationError {
    #[snafu(display("Duration must be greater than zero, got {minutes}"))]
    #[non_exhaustive]
    NonPositive { minutes: i64 },
    #[snafu(display("Duration of {minutes} minutes is too long"))]
    #[non_exhaustive]
    TooLong { minutes: u64 },
}

/// The pair of lengths a cycle alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: PhaseDuration,
    pub rest: PhaseDuration,
}

impl Durations {
    /// Get the duration corresponding to phase.
    pub fn of(&self, phase: Phase) -> PhaseDuration {
        match phase {
            Phase::Work => self.work,
            Phase::Break => self.rest,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work: PhaseDuration {
                minutes: DEFAULT_WORK_MINUTES,
            },
            rest: PhaseDuration {
                minutes: DEFAULT_BREAK_MINUTES,
            },
        }
    }
}
