pub mod commands;
pub mod config;
pub mod error;
pub mod fasting;
pub mod logging;
pub mod platform;
pub mod render;

pub use fasting::duration::calculate_fasting_hours;
pub use fasting::state::{metabolic_state, science_details};

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
