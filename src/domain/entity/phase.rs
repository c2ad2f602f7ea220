use std::fmt::{Display, Formatter, Result as FmtResult};

/// The kind of period the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Get the [`Phase`] every cycle starts with.
    pub fn initial() -> Self {
        Self::Work
    }

    /// Get the next [`Phase`] based on the current one.
    pub fn next(self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Upper-case label shown in the terminal.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Break => "BREAK",
        }
    }

    /// Body of the notification sent when a countdown of this phase
    /// completes.
    pub fn completion_message(self) -> &'static str {
        match self {
            Self::Work => "Work session complete! Time for a break.",
            Self::Break => "Break complete! Time to get back to work.",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Work => f.write_str("Work"),
            Self::Break => f.write_str("Break"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_next() {
        let phase = Phase::initial();
        assert_eq!(phase, Phase::Work);
        let phase = phase.next();
        assert_eq!(phase, Phase::Break);
        let phase = phase.next();
        assert_eq!(phase, Phase::Work);
    }

    #[test]
    fn phase_alternates_strictly() {
        let phases: Vec<Phase> = std::iter::successors(Some(Phase::initial()), |p| Some(p.next()))
            .take(100)
            .collect();

        assert!(phases.windows(2).all(|pair| pair[0] != pair[1]));
        assert_eq!(phases.iter().filter(|p| **p == Phase::Work).count(), 50);
    }

    #[test]
    fn phase_text() {
        assert_eq!(Phase::Work.label(), "WORK");
        assert_eq!(Phase::Break.label(), "BREAK");
        assert_eq!(Phase::Break.to_string(), "Break");
        assert!(Phase::Work.completion_message().starts_with("Work session complete"));
        assert!(Phase::Break.completion_message().starts_with("Break complete"));
    }
}
