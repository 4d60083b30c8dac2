use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fasting_tracker::commands;
use fasting_tracker::commands::calc::CalcOptions;
use fasting_tracker::config;
use fasting_tracker::fasting::duration::DayAnchor;
use fasting_tracker::logging;
use fasting_tracker::platform;
use fasting_tracker::render::Style;
use fasting_tracker::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fastrack")]
#[command(about = "Fasting duration calculator with metabolic state insight")]
#[command(version)]
struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,

    #[arg(long, global = true, help = "Path to config file")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute fasting duration and describe the likely metabolic state
    Calc {
        #[arg(long, help = "Last meal time (HH:MM, default 20:00)")]
        last_meal: Option<String>,
        #[arg(long, help = "Break-fast time (HH:MM, default 10:00)")]
        break_fast: Option<String>,
        #[arg(long, help = "Anchor date (YYYY-MM-DD, default today)")]
        date: Option<String>,
        #[arg(long, value_enum, help = "How the two times are placed on the calendar")]
        anchor: Option<DayAnchor>,
        #[arg(long, value_enum, help = "Text layout")]
        style: Option<Style>,
        #[arg(long, help = "Expand the science panel (gauge style)")]
        details: bool,
        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },

    /// List metabolic state buckets
    States {
        #[arg(long, value_enum, default_value = "text", help = "Output format")]
        format: OutputFormat,
    },

    /// Inspect configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    List,
    /// Print one value by dotted key (e.g. target.min_hours)
    Get { key: String },
    /// Print the config file location
    Path,
    /// Write a config file with default values
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match &cli.command {
        Commands::Calc {
            last_meal,
            break_fast,
            date,
            anchor,
            style,
            details,
            format,
        } => {
            let config = config::load(cli.config.as_ref())?;
            let opts = CalcOptions {
                last_meal: last_meal.clone(),
                break_fast: break_fast.clone(),
                date: date.clone(),
                anchor: *anchor,
                style: *style,
                details: *details,
                format: *format,
            };
            commands::calc::calc(&config, &opts)?;
        }
        Commands::States { format } => {
            commands::states::list(*format)?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => {
                let config = config::load(cli.config.as_ref())?;
                commands::config::list(&config)?;
            }
            ConfigAction::Get { key } => {
                let config = config::load(cli.config.as_ref())?;
                commands::config::get(key, &config)?;
            }
            ConfigAction::Path => {
                commands::config::path(&platform::config_path(cli.config.as_ref())?)?;
            }
            ConfigAction::Init { force } => {
                commands::config::init(&platform::config_path(cli.config.as_ref())?, *force)?;
            }
        },
    }

    Ok(())
}
