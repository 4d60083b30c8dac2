//! Narrative classification of a fasting duration.
//!
//! One ascending threshold table drives every lookup here. Bucket `i` covers
//! `[THRESHOLDS[i - 1], THRESHOLDS[i])`, the first bucket starts at zero and
//! the last one is unbounded above.

use crate::error::Result;
use crate::fasting::duration::validate_hours;
use serde::Serialize;

pub const THRESHOLDS: [f64; 6] = [4.0, 8.0, 12.0, 16.0, 20.0, 24.0];

/// Zero-based bucket for `hours`.
pub fn bucket_index(hours: f64) -> usize {
    THRESHOLDS
        .iter()
        .position(|&upper| hours < upper)
        .unwrap_or(THRESHOLDS.len())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetabolicState {
    ActiveDigestion,
    InsulinLowering,
    GlycogenDecreasing,
    GlycogenLow,
    MildKetosis,
    DeeperKetosis,
    ProlongedFasting,
}

/// Long-form description shown in the expandable science panel.
#[derive(Debug, PartialEq, Serialize)]
pub struct ScienceDetails {
    pub headline: &'static str,
    pub fuel: &'static str,
    pub hormones: &'static str,
    pub processes: &'static [&'static str],
}

impl MetabolicState {
    pub const ALL: [MetabolicState; 7] = [
        MetabolicState::ActiveDigestion,
        MetabolicState::InsulinLowering,
        MetabolicState::GlycogenDecreasing,
        MetabolicState::GlycogenLow,
        MetabolicState::MildKetosis,
        MetabolicState::DeeperKetosis,
        MetabolicState::ProlongedFasting,
    ];

    pub fn from_hours(hours: f64) -> Self {
        Self::ALL[bucket_index(hours)]
    }

    /// Like [`MetabolicState::from_hours`], but refuses negative or non-finite input.
    pub fn try_from_hours(hours: f64) -> Result<Self> {
        validate_hours(hours).map(Self::from_hours)
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Inclusive lower and exclusive upper bound in hours.
    pub fn range(self) -> (f64, Option<f64>) {
        let i = self.index();
        let lower = if i == 0 { 0.0 } else { THRESHOLDS[i - 1] };
        (lower, THRESHOLDS.get(i).copied())
    }

    pub fn range_label(self) -> String {
        match self.range() {
            (lower, Some(upper)) => format!("{}–{}h", lower, upper),
            (lower, None) => format!("{}h+", lower),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ActiveDigestion => "Active digestion",
            Self::InsulinLowering => "Insulin lowering",
            Self::GlycogenDecreasing => "Glycogen decreasing",
            Self::GlycogenLow => "Glycogen low",
            Self::MildKetosis => "Mild ketosis",
            Self::DeeperKetosis => "Deeper ketosis",
            Self::ProlongedFasting => "Prolonged fasting",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::ActiveDigestion => "Active digestion. Rising blood glucose and insulin.",
            Self::InsulinLowering => "Insulin lowering. Beginning to shift into fat utilization.",
            Self::GlycogenDecreasing => {
                "Glycogen stores gradually decreasing. More fat oxidation."
            }
            Self::GlycogenLow => "Glycogen low. Ketone production starting.",
            Self::MildKetosis => "Mild ketosis. Increased fat burning. Autophagy beginning.",
            Self::DeeperKetosis => "Deeper ketosis. Autophagy and AMPK activation rising.",
            Self::ProlongedFasting => {
                "Prolonged fasting state. High ketone production and cellular cleanup."
            }
        }
    }

    pub fn details(self) -> &'static ScienceDetails {
        &SCIENCE[self.index()]
    }
}

/// Short narrative for a duration.
pub fn metabolic_state(hours: f64) -> &'static str {
    MetabolicState::from_hours(hours).summary()
}

/// Long narrative for a duration, picked with the same thresholds as [`metabolic_state`].
pub fn science_details(hours: f64) -> &'static ScienceDetails {
    MetabolicState::from_hours(hours).details()
}

static SCIENCE: [ScienceDetails; 7] = [
    ScienceDetails {
        headline: "Fed state: the last meal is still being absorbed.",
        fuel: "Glucose from the meal is the primary fuel.",
        hormones: "Insulin is elevated to move glucose into muscle, liver and fat cells.",
        processes: &[
            "Excess glucose is stored as liver and muscle glycogen.",
            "Fat storage is favoured while insulin stays high.",
        ],
    },
    ScienceDetails {
        headline: "Post-absorptive phase: the meal has largely been processed.",
        fuel: "Blood glucose is maintained by releasing stored liver glycogen.",
        hormones: "Insulin falls back toward baseline and glucagon starts to rise.",
        processes: &[
            "Glycogenolysis begins to supply glucose between meals.",
            "Fat cells start releasing small amounts of fatty acids.",
        ],
    },
    ScienceDetails {
        headline: "Early fasting: glycogen reserves are being drawn down.",
        fuel: "A growing share of energy comes from fatty acids.",
        hormones: "Glucagon continues to rise while insulin stays low.",
        processes: &[
            "Liver glycogen declines steadily.",
            "Fat oxidation increases in muscle and liver.",
        ],
    },
    ScienceDetails {
        headline: "Metabolic switch: liver glycogen is running low.",
        fuel: "Fat becomes the dominant fuel and ketone bodies begin to appear.",
        hormones: "Low insulin and higher glucagon favour lipolysis.",
        processes: &[
            "The liver converts fatty acids into ketone bodies.",
            "Gluconeogenesis helps hold blood glucose steady.",
        ],
    },
    ScienceDetails {
        headline: "Mild ketosis: the body is running mostly on fat.",
        fuel: "Fatty acids and rising ketones supply most of the energy.",
        hormones: "Growth hormone output increases to preserve lean tissue.",
        processes: &[
            "Ketone levels climb into the mildly ketotic range.",
            "Autophagy, the recycling of damaged cell components, starts to ramp up.",
        ],
    },
    ScienceDetails {
        headline: "Deeper ketosis: fat adaptation is well under way.",
        fuel: "Ketones provide a substantial share of the brain's energy.",
        hormones: "AMPK activity rises as cellular energy sensors detect the fast.",
        processes: &[
            "Autophagy is increasingly active.",
            "mTOR signalling is suppressed.",
        ],
    },
    ScienceDetails {
        headline: "Prolonged fast: extended ketosis and cellular maintenance.",
        fuel: "High ketone production covers most energy needs.",
        hormones: "Insulin is at its lowest and growth hormone remains elevated.",
        processes: &[
            "Cellular cleanup and autophagy are pronounced.",
            "Electrolytes and hydration need attention on fasts this long.",
        ],
    },
];
