use crate::OutputFormat;
use crate::fasting::report::StateSummary;
use crate::fasting::state::MetabolicState;
use anyhow::{Context, Result};
use std::fmt::Write;

pub fn render(format: OutputFormat) -> Result<String> {
    let states: Vec<StateSummary> = MetabolicState::ALL.iter().map(|&s| s.into()).collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&states).context("Failed to serialize states")
        }
        OutputFormat::Text => {
            let mut out = String::new();
            writeln!(out, "{:<4} {:<10} {:<20} {}", "#", "Range", "State", "Description")?;
            write!(out, "{}", "-".repeat(100))?;
            for s in &states {
                write!(
                    out,
                    "\n{:<4} {:<10} {:<20} {}",
                    s.bucket, s.range, s.label, s.summary
                )?;
            }
            Ok(out)
        }
    }
}

pub fn list(format: OutputFormat) -> Result<()> {
    println!("{}", render(format)?);
    Ok(())
}
