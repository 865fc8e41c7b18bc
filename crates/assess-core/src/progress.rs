use crate::form::ProgressDisplay;
use crate::profile::Profile;
use crate::types::{Phase, StepStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepProgress {
    pub phase: Phase,
    pub title: &'static str,
    pub status: StepStatus,
}

/// Step states derived from a profile. Never stored; recompute after every
/// change to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressView {
    pub steps: Vec<StepProgress>,
    pub completed: usize,
    pub total: usize,
    pub percent: f64,
    pub label: String,
}

impl ProgressView {
    pub fn compute(profile: &Profile, enabled: &[Phase]) -> Self {
        let basics_done = profile.has_data_for(Phase::Basics);
        let steps: Vec<StepProgress> = Phase::all()
            .iter()
            .copied()
            .filter(|p| enabled.contains(p))
            .map(|phase| {
                let unlocked = phase == Phase::Basics || basics_done;
                let status = if !unlocked {
                    StepStatus::Locked
                } else if profile.has_data_for(phase) {
                    StepStatus::Done
                } else {
                    StepStatus::Todo
                };
                StepProgress {
                    phase,
                    title: phase.title(),
                    status,
                }
            })
            .collect();

        let completed = steps
            .iter()
            .filter(|s| s.status == StepStatus::Done)
            .count();
        let total = steps.len();
        let percent = if total == 0 {
            0.0
        } else {
            (completed as f64 * 1000.0 / total as f64).round() / 10.0
        };
        Self {
            label: format!("Progress: ({completed} of {total} steps completed)"),
            steps,
            completed,
            total,
            percent,
        }
    }

    pub fn status_of(&self, phase: Phase) -> Option<StepStatus> {
        self.steps.iter().find(|s| s.phase == phase).map(|s| s.status)
    }
}

/// Recompute progress for `profile` and push it onto `display`.
pub fn reflect_progress<D: ProgressDisplay + ?Sized>(
    profile: &Profile,
    enabled: &[Phase],
    display: &mut D,
) -> ProgressView {
    let view = ProgressView::compute(profile, enabled);
    tracing::debug!(completed = view.completed, total = view.total, "progress reflected");
    display.show_progress(&view);
    view
}
