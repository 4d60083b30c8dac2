use crate::OutputFormat;
use crate::config::Config;
use crate::fasting::duration::{DayAnchor, FastingWindow, parse_date, parse_time_of_day};
use crate::fasting::report::FastingReport;
use crate::render::{JsonPresenter, Presenter, Style, presenter_for};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

/// Flags given to `calc`; anything left `None` falls back to config.
#[derive(Debug, Default, Clone)]
pub struct CalcOptions {
    pub last_meal: Option<String>,
    pub break_fast: Option<String>,
    pub date: Option<String>,
    pub anchor: Option<DayAnchor>,
    pub style: Option<Style>,
    pub details: bool,
    pub format: OutputFormat,
}

pub fn build_report(
    config: &Config,
    opts: &CalcOptions,
    today: NaiveDate,
) -> Result<FastingReport> {
    let last_meal_raw = opts.last_meal.as_deref().unwrap_or(&config.defaults.last_meal);
    let break_fast_raw = opts
        .break_fast
        .as_deref()
        .unwrap_or(&config.defaults.break_fast);

    let last_meal = parse_time_of_day(last_meal_raw).context("Invalid last meal time")?;
    let break_fast = parse_time_of_day(break_fast_raw).context("Invalid break-fast time")?;
    let date = match &opts.date {
        Some(raw) => parse_date(raw).context("Invalid --date")?,
        None => today,
    };
    let anchor = opts.anchor.unwrap_or(config.defaults.anchor);

    let window = FastingWindow::from_times(last_meal, break_fast, date, anchor)?;
    tracing::debug!(
        last_meal = %window.last_meal,
        break_fast = %window.break_fast,
        ?anchor,
        "computed fasting window"
    );

    Ok(FastingReport::build(window, &config.target))
}

pub fn render(config: &Config, opts: &CalcOptions, today: NaiveDate) -> Result<String> {
    let report = build_report(config, opts, today)?;
    match opts.format {
        OutputFormat::Json => JsonPresenter.render(&report),
        OutputFormat::Text => {
            let style = opts.style.unwrap_or(config.display.style);
            let show_details = opts.details || config.display.show_details;
            presenter_for(style, show_details).render(&report)
        }
    }
}

pub fn calc(config: &Config, opts: &CalcOptions) -> Result<()> {
    let output = render(config, opts, Local::now().date_naive())?;
    println!("{}", output);
    Ok(())
}
