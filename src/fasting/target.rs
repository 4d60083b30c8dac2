use crate::error::{FastingError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    Below,
    Within,
    Above,
}

/// Suggested fasting band, inclusive at both ends.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct TargetWindow {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl Default for TargetWindow {
    fn default() -> Self {
        Self {
            min_hours: 14.0,
            max_hours: 16.0,
        }
    }
}

impl TargetWindow {
    pub fn validate(&self) -> Result<()> {
        let finite = self.min_hours.is_finite() && self.max_hours.is_finite();
        if !finite || self.min_hours < 0.0 || self.max_hours < 0.0 {
            return Err(FastingError::InvalidTarget {
                message: "bounds must be finite and non-negative".to_string(),
            });
        }
        if self.min_hours > self.max_hours {
            return Err(FastingError::InvalidTarget {
                message: format!(
                    "min_hours ({}) is greater than max_hours ({})",
                    self.min_hours, self.max_hours
                ),
            });
        }
        Ok(())
    }

    pub fn assess(&self, hours: f64) -> TargetStatus {
        if hours < self.min_hours {
            TargetStatus::Below
        } else if hours <= self.max_hours {
            TargetStatus::Within
        } else {
            TargetStatus::Above
        }
    }

    pub fn label(&self) -> String {
        format!("{}–{} hour", self.min_hours, self.max_hours)
    }

    pub fn message(&self, status: TargetStatus) -> String {
        match status {
            TargetStatus::Within => {
                format!("You're within the optimal {} fasting window.", self.label())
            }
            TargetStatus::Below => format!(
                "Below the {} target window. A slightly longer fast would reach it.",
                self.label()
            ),
            TargetStatus::Above => format!(
                "Above the {} target window. Make sure longer fasts are intentional.",
                self.label()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        let target = TargetWindow::default();
        assert_eq!(target.assess(13.99), TargetStatus::Below);
        assert_eq!(target.assess(14.0), TargetStatus::Within);
        assert_eq!(target.assess(16.0), TargetStatus::Within);
        assert_eq!(target.assess(16.01), TargetStatus::Above);
    }

    #[test]
    fn test_messages_name_the_band() {
        let target = TargetWindow::default();
        assert!(target.message(TargetStatus::Within).contains("optimal 14–16 hour"));
        assert!(target.message(TargetStatus::Below).starts_with("Below"));
        assert!(target.message(TargetStatus::Above).starts_with("Above"));
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let target = TargetWindow {
            min_hours: 18.0,
            max_hours: 12.0,
        };
        let err = target.validate().unwrap_err();
        assert!(err.to_string().contains("greater than"));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let target = TargetWindow {
            min_hours: f64::NAN,
            max_hours: 16.0,
        };
        assert!(target.validate().is_err());
    }
}
