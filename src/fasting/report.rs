use crate::fasting::duration::{FastingWindow, format_hours, progress_fraction};
use crate::fasting::state::{MetabolicState, ScienceDetails};
use crate::fasting::target::{TargetStatus, TargetWindow};
use serde::Serialize;

/// Colour zone of the gauge a duration falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    /// [0, 8)
    Fed,
    /// [8, 16)
    Transition,
    /// [16, 24], and anything past the end of the gauge
    Fasted,
}

impl GaugeBand {
    pub const ALL: [GaugeBand; 3] = [GaugeBand::Fed, GaugeBand::Transition, GaugeBand::Fasted];

    pub fn from_hours(hours: f64) -> Self {
        if hours < 8.0 {
            Self::Fed
        } else if hours < 16.0 {
            Self::Transition
        } else {
            Self::Fasted
        }
    }

    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Fed => (0.0, 8.0),
            Self::Transition => (8.0, 16.0),
            Self::Fasted => (16.0, 24.0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSummary {
    /// One-based bucket number, 1 through 7.
    pub bucket: usize,
    pub state: MetabolicState,
    pub label: &'static str,
    pub range: String,
    pub summary: &'static str,
}

impl From<MetabolicState> for StateSummary {
    fn from(state: MetabolicState) -> Self {
        Self {
            bucket: state.index() + 1,
            state,
            label: state.label(),
            range: state.range_label(),
            summary: state.summary(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TargetFeedback {
    pub min_hours: f64,
    pub max_hours: f64,
    pub status: TargetStatus,
    pub message: String,
}

/// Everything a presenter needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct FastingReport {
    pub window: FastingWindow,
    pub hours: f64,
    pub hours_display: String,
    pub state: StateSummary,
    pub details: &'static ScienceDetails,
    pub progress: f64,
    pub band: GaugeBand,
    pub target: TargetFeedback,
}

impl FastingReport {
    pub fn build(window: FastingWindow, target: &TargetWindow) -> Self {
        let hours = window.hours();
        let state = MetabolicState::from_hours(hours);
        let status = target.assess(hours);

        tracing::debug!(
            hours,
            bucket = state.index() + 1,
            target = ?status,
            "classified fasting window"
        );

        Self {
            window,
            hours,
            hours_display: format_hours(hours),
            state: state.into(),
            details: state.details(),
            progress: progress_fraction(hours),
            band: GaugeBand::from_hours(hours),
            target: TargetFeedback {
                min_hours: target.min_hours,
                max_hours: target.max_hours,
                status,
                message: target.message(status),
            },
        }
    }
}
