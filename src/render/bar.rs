use super::{JOURNAL_HINT, Presenter, TITLE, progress_bar, timeline_caption};
use crate::fasting::report::FastingReport;
use anyhow::Result;
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

/// Single column: result, state, then the timeline bar.
pub struct BarPresenter;

impl Presenter for BarPresenter {
    fn render(&self, report: &FastingReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", TITLE)?;
        writeln!(out)?;
        writeln!(
            out,
            "Last meal:  {}",
            report.window.last_meal.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(
            out,
            "Break-fast: {}",
            report.window.break_fast.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out)?;
        writeln!(out, "⏱️ Hours Fasted: {} hours", report.hours_display)?;
        writeln!(out)?;
        writeln!(out, "🔬 Likely Metabolic State")?;
        writeln!(out, "{}", report.state.summary)?;
        writeln!(out)?;
        writeln!(out, "Fasting Timeline")?;
        writeln!(
            out,
            "{} {:>3.0}%",
            progress_bar(report.progress, BAR_WIDTH),
            report.progress * 100.0
        )?;
        writeln!(out, "{}", timeline_caption(report))?;
        writeln!(out, "---")?;
        write!(out, "{}", JOURNAL_HINT)?;
        Ok(out)
    }
}
