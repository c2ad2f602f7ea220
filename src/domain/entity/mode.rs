use crate::domain::entity::{Durations, Phase, PhaseDuration};

/// What the timer does once started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Alternate work and break forever with the default durations.
    InfiniteCycle,
    /// Count down one default-length work phase, then exit.
    SingleWork,
    /// Count down one default-length break phase, then exit.
    SingleBreak,
    /// Alternate work and break forever with the given durations.
    CustomCycle {
        work: PhaseDuration,
        rest: PhaseDuration,
    },
}

/// Immutable settings of one run, built once from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub mode: RunMode,
    pub auto: bool,
}

impl Config {
    /// Creates a new [`Config`].
    pub fn new(mode: RunMode, auto: bool) -> Self {
        Self { mode, auto }
    }

    /// The durations every phase of this run uses.
    pub fn durations(&self) -> Durations {
        match self.mode {
            RunMode::CustomCycle { work, rest } => Durations { work, rest },
            _ => Durations::default(),
        }
    }

    /// The phase counted down first.
    pub fn first_phase(&self) -> Phase {
        match self.mode {
            RunMode::SingleBreak => Phase::Break,
            _ => Phase::initial(),
        }
    }

    /// Returns `true` if the run ends after its first countdown.
    pub fn is_single_session(&self) -> bool {
        matches!(self.mode, RunMode::SingleWork | RunMode::SingleBreak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::entity::duration::{DEFAULT_BREAK_MINUTES, DEFAULT_WORK_MINUTES};

    #[test]
    fn config_infinite_cycle() {
        let config = Config::new(RunMode::InfiniteCycle, false);
        assert_eq!(config.mode, RunMode::InfiniteCycle);
        assert!(!config.auto);
        assert_eq!(config.first_phase(), Phase::Work);
        assert!(!config.is_single_session());
        assert_eq!(config.durations(), Durations::default());
    }

    #[test]
    fn config_single_sessions() {
        let work = Config::new(RunMode::SingleWork, false);
        assert!(work.is_single_session());
        assert_eq!(work.first_phase(), Phase::Work);
        assert_eq!(work.durations().work.minutes(), DEFAULT_WORK_MINUTES);

        let rest = Config::new(RunMode::SingleBreak, true);
        assert!(rest.is_single_session());
        assert_eq!(rest.first_phase(), Phase::Break);
        assert_eq!(rest.durations().rest.minutes(), DEFAULT_BREAK_MINUTES);
    }

    #[test]
    fn config_custom_cycle() {
        let work = PhaseDuration::try_new(30).unwrap();
        let rest = PhaseDuration::try_new(5).unwrap();
        let config = Config::new(RunMode::CustomCycle { work, rest }, false);

        assert!(!config.is_single_session());
        assert_eq!(config.first_phase(), Phase::Work);
        assert_eq!(config.durations().of(Phase::Work), work);
        assert_eq!(config.durations().of(Phase::Break), rest);
    }
}
