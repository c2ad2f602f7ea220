use std::num::{IntErrorKind, ParseIntError};

use snafu::prelude::*;

use crate::domain::entity::duration::TryNewPhaseDurationError;
use crate::domain::entity::{Config, PhaseDuration, RunMode};

/// Word that switches on automatic advancing, accepted at any position.
pub const AUTO_KEYWORD: &str = "auto";

/// Text printed when the words on the command line match no known form.
pub const USAGE: &str = "\
Usage:
  pomo                    - Run infinite work/break cycle
  pomo work               - Start work timer (default duration)
  pomo break              - Start break timer (default duration)
  pomo work 30 break 5    - Set custom durations and run cycle
  Add 'auto' anywhere for automatic mode switching";

/// Turn the positional words given to the program into a [`Config`].
///
/// The first `auto` is removed wherever it appears and the remaining words
/// must be empty, `work`, `break` or `work <N> break <M>`.
///
/// # Errors
///
/// This function will return an error if the words match none of the forms
/// or the custom durations are not positive integers of a representable
/// length.
pub fn interpret<S: AsRef<str>>(words: &[S]) -> Result<Config, InterpretError> {
    let mut words: Vec<&str> = words.iter().map(AsRef::as_ref).collect();

    let auto = match words.iter().position(|word| *word == AUTO_KEYWORD) {
        Some(index) => {
            words.remove(index);
            true
        }
        None => false,
    };

    let mode = match words.as_slice() {
        [] => RunMode::InfiniteCycle,
        ["work"] => RunMode::SingleWork,
        ["break"] => RunMode::SingleBreak,
        ["work", work, "break", rest] => custom_cycle(work, rest)?,
        _ => return UsageSnafu.fail(),
    };

    tracing::debug!(?mode, auto, "Interpreted arguments");
    Ok(Config::new(mode, auto))
}

fn custom_cycle(work: &str, rest: &str) -> Result<RunMode, InterpretError> {
    let work = parse_minutes(work)?;
    let rest = parse_minutes(rest)?;

    Ok(RunMode::CustomCycle {
        work: phase_duration(work)?,
        rest: phase_duration(rest)?,
    })
}

/// Integers outside the `i64` range saturate, so they are rejected as too
/// long or non-positive rather than as non-integers.
fn parse_minutes(word: &str) -> Result<i64, InterpretError> {
    match word.trim().parse::<i64>() {
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(err) if *err.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        parsed => parsed.context(InvalidDurationSnafu),
    }
}

fn phase_duration(minutes: i64) -> Result<PhaseDuration, InterpretError> {
    PhaseDuration::try_new(minutes).map_err(|source| match source {
        TryNewPhaseDurationError::TooLong { .. } => InterpretError::TooLongDuration { source },
        _ => InterpretError::NonPositiveDuration { source },
    })
}

/// An error type of interpreting command line words.
#[derive(Debug, Clone, Snafu, PartialEq, Eq)]
#[non_exhaustive]
pub enum InterpretError {
    #[snafu(display("{}", USAGE))]
    #[non_exhaustive]
    Usage,
    #[snafu(display("Invalid duration values. Please use integers."))]
    #[non_exhaustive]
    InvalidDuration { source: ParseIntError },
    #[snafu(display("Invalid duration values. Please use positive integers."))]
    #[non_exhaustive]
    NonPositiveDuration { source: TryNewPhaseDurationError },
    #[snafu(display("Invalid duration values. Please use shorter durations."))]
    #[non_exhaustive]
    TooLongDuration { source: TryNewPhaseDurationError },
}
