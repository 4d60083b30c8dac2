//! Presentation adapters for a [`FastingReport`].
//!
//! The computation never changes between looks; each style is a separate
//! [`Presenter`] so restyling does not touch the fasting logic.

pub mod bar;
pub mod columns;
pub mod gauge;

use crate::fasting::report::FastingReport;
use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use bar::BarPresenter;
pub use columns::ColumnsPresenter;
pub use gauge::GaugePresenter;

pub const TITLE: &str = "⏳ Fasting Tracker + Metabolic Insight";
pub const JOURNAL_HINT: &str =
    "You can paste your fasting duration into Notion for tracking and journaling.";

pub trait Presenter {
    fn render(&self, report: &FastingReport) -> Result<String>;
}

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Result, state and a plain progress bar
    Bar,
    /// Two-column layout
    Columns,
    /// Banded gauge with target feedback and science panel
    #[default]
    Gauge,
}

pub struct JsonPresenter;

impl Presenter for JsonPresenter {
    fn render(&self, report: &FastingReport) -> Result<String> {
        serde_json::to_string_pretty(report).context("Failed to serialize fasting report")
    }
}

pub fn presenter_for(style: Style, show_details: bool) -> Box<dyn Presenter> {
    match style {
        Style::Bar => Box::new(BarPresenter),
        Style::Columns => Box::new(ColumnsPresenter),
        Style::Gauge => Box::new(GaugePresenter { show_details }),
    }
}

/// Fixed-width `[####----]` bar for a fraction in `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn timeline_caption(report: &FastingReport) -> String {
    format!(
        "{} hours out of a 24-hour reference window",
        report.hours_display
    )
}
