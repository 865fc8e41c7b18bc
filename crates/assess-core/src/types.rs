use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// A sequential stage of the assessment. `Basics`, `CurrentState` and
/// `FutureState` are the steps of phase 1; `Initiatives` is phase 2 and
/// `Roadmap` is phase 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Basics,
    CurrentState,
    FutureState,
    Initiatives,
    Roadmap,
}

impl Phase {
    pub fn all() -> &'static [Phase] {
        &[
            Phase::Basics,
            Phase::CurrentState,
            Phase::FutureState,
            Phase::Initiatives,
            Phase::Roadmap,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Basics => "basics",
            Phase::CurrentState => "current_state",
            Phase::FutureState => "future_state",
            Phase::Initiatives => "initiatives",
            Phase::Roadmap => "roadmap",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Phase::Basics => "The Basics",
            Phase::CurrentState => "Current State",
            Phase::FutureState => "Future State",
            Phase::Initiatives => "Initiatives",
            Phase::Roadmap => "Roadmap",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StepStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Locked,
    Todo,
    Done,
}

impl StepStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StepStatus::Locked => "locked",
            StepStatus::Todo => "to do",
            StepStatus::Done => "done",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
