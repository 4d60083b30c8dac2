use super::{JOURNAL_HINT, Presenter, TITLE, progress_bar, timeline_caption};
use crate::fasting::duration::format_hours_minutes;
use crate::fasting::report::FastingReport;
use anyhow::Result;
use std::fmt::Write;

const LEFT_WIDTH: usize = 34;
const BAR_WIDTH: usize = 30;

/// Inputs and result on the left, state and timeline on the right.
pub struct ColumnsPresenter;

impl Presenter for ColumnsPresenter {
    fn render(&self, report: &FastingReport) -> Result<String> {
        let left = vec![
            "Input".to_string(),
            format!("Last meal:  {}", report.window.last_meal.format("%H:%M")),
            format!("Break-fast: {}", report.window.break_fast.format("%H:%M")),
            String::new(),
            "Result".to_string(),
            format!("Hours Fasted: {}", report.hours_display),
            format!("({})", format_hours_minutes(report.hours)),
        ];

        let mut right = vec![
            "Likely Metabolic State".to_string(),
            format!("[{}] {}", report.state.range, report.state.label),
        ];
        right.extend(wrap(report.state.summary, BAR_WIDTH + 2));
        right.push(String::new());
        right.push("Fasting Timeline".to_string());
        right.push(progress_bar(report.progress, BAR_WIDTH));

        let mut out = String::new();
        writeln!(out, "{}", TITLE)?;
        writeln!(out)?;
        for row in 0..left.len().max(right.len()) {
            let l = left.get(row).map(String::as_str).unwrap_or("");
            let r = right.get(row).map(String::as_str).unwrap_or("");
            writeln!(out, "{:<width$}| {}", l, r, width = LEFT_WIDTH)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", timeline_caption(report))?;
        writeln!(out, "---")?;
        write!(out, "{}", JOURNAL_HINT)?;
        Ok(out)
    }
}

/// Greedy word wrap; words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("Glycogen low. Ketone production starting.", 20);
        assert_eq!(lines, vec!["Glycogen low. Ketone", "production starting."]);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
    }

    #[test]
    fn test_wrap_empty() {
        assert!(wrap("", 10).is_empty());
    }
}
