use super::{JOURNAL_HINT, Presenter, TITLE};
use crate::fasting::duration::REFERENCE_WINDOW_HOURS;
use crate::fasting::report::{FastingReport, GaugeBand};
use crate::fasting::target::TargetStatus;
use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::fmt::Write;
use termtree::Tree;

const CELLS_PER_HOUR: usize = 2;
const GAUGE_CELLS: usize = REFERENCE_WINDOW_HOURS as usize * CELLS_PER_HOUR;

/// Banded gauge over the 24-hour reference window.
pub struct GaugePresenter {
    /// Expand the science panel instead of showing a hint.
    pub show_details: bool,
}

impl Presenter for GaugePresenter {
    fn render(&self, report: &FastingReport) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", TITLE.bold())?;
        writeln!(out)?;
        writeln!(
            out,
            "{} → {}",
            report.window.last_meal.format("%H:%M"),
            report.window.break_fast.format("%H:%M")
        )?;
        writeln!(out, "Hours Fasted: {} hours", report.hours_display.bold())?;
        writeln!(out)?;
        writeln!(out, "{}", gauge_line(report.progress))?;
        writeln!(out, "{}", needle_line(report))?;
        writeln!(out, "{}", legend())?;
        writeln!(out)?;
        writeln!(
            out,
            "🔬 {} [{}]",
            report.state.label.bold(),
            report.state.range
        )?;
        writeln!(out, "{}", report.state.summary)?;
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            target_icon(report.target.status),
            report.target.message
        )?;
        writeln!(out)?;
        if self.show_details {
            write!(out, "{}", science_tree(report))?;
        } else {
            writeln!(out, "🧪 The science (run with --details to expand)")?;
        }
        writeln!(out, "---")?;
        write!(out, "{}", JOURNAL_HINT)?;
        Ok(out)
    }
}

fn paint(band: GaugeBand, text: &str) -> ColoredString {
    match band {
        GaugeBand::Fed => text.green(),
        GaugeBand::Transition => text.yellow(),
        GaugeBand::Fasted => text.red(),
    }
}

fn filled_cells(progress: f64) -> usize {
    ((progress.clamp(0.0, 1.0) * GAUGE_CELLS as f64).round() as usize).min(GAUGE_CELLS)
}

fn gauge_line(progress: f64) -> String {
    let filled = filled_cells(progress);
    let mut line = String::from("│");
    for band in GaugeBand::ALL {
        let (lo, hi) = band.bounds();
        let start = lo as usize * CELLS_PER_HOUR;
        let end = hi as usize * CELLS_PER_HOUR;
        let lit = filled.clamp(start, end) - start;
        let segment = format!("{}{}", "█".repeat(lit), "░".repeat(end - start - lit));
        line.push_str(&paint(band, &segment).to_string());
    }
    line.push('│');
    line
}

fn needle_line(report: &FastingReport) -> String {
    let pos = filled_cells(report.progress).min(GAUGE_CELLS - 1);
    format!("{}▲ {}h", " ".repeat(pos + 1), report.hours_display)
}

fn legend() -> String {
    GaugeBand::ALL
        .iter()
        .map(|&band| {
            let (lo, hi) = band.bounds();
            let name = match band {
                GaugeBand::Fed => "Fed",
                GaugeBand::Transition => "Transition",
                GaugeBand::Fasted => "Fasted",
            };
            format!("{} {} {}–{}h", paint(band, "■"), name, lo, hi)
        })
        .collect::<Vec<_>>()
        .join("   ")
}

fn target_icon(status: TargetStatus) -> &'static str {
    match status {
        TargetStatus::Within => "✅",
        TargetStatus::Below => "⏳",
        TargetStatus::Above => "⚠️",
    }
}

fn science_tree(report: &FastingReport) -> Tree<String> {
    let details = report.details;
    let mut processes = Tree::new("Cellular processes".to_string());
    for p in details.processes {
        processes.push(Tree::new(p.to_string()));
    }

    Tree::new(format!(
        "🧪 The science ({}: {})",
        report.state.range, report.state.label
    ))
    .with_leaves([
        Tree::new(details.headline.to_string()),
        Tree::new(format!("Fuel: {}", details.fuel)),
        Tree::new(format!("Hormones: {}", details.hormones)),
        processes,
    ])
}
