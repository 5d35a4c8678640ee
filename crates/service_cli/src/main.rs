//! Stockast CLI - Monte Carlo Stock Forecasting
//!
//! This is the operational entry point for the Stockast forecasting engine.
//!
//! # Commands
//!
//! - `stockast forecast` - Calibrate, simulate and write the expected trajectory
//! - `stockast volatility` - Print the volatility estimated from historical data
//! - `stockast check` - Validate configuration and input before a long run
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires the adapter layer
//! (`adapter_loader`) to the pricer layer (`pricer_core`, `pricer_pricing`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::StockastConfig;

/// Stockast stock forecasting tool
#[derive(Parser)]
#[command(name = "stockast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "stockast.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Monte Carlo forecast and write the expected trajectory
    Forecast {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Estimate volatility from the historical data only
    Volatility {
        #[command(flatten)]
        overrides: Overrides,
    },

    /// Check configuration, input data and output destination
    Check {
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line overrides, applied after the config file and environment.
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Historical price file (first line, comma separated)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Forecast output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Spot price at time zero
    #[arg(long)]
    spot_price: Option<f64>,

    /// Prices per trajectory, including the spot
    #[arg(short, long)]
    time_steps: Option<usize>,

    /// Risk-free rate
    #[arg(long)]
    risk_free_rate: Option<f64>,

    /// Paths averaged per outer iteration
    #[arg(long)]
    in_loops: Option<usize>,

    /// Outer iterations
    #[arg(long)]
    out_loops: Option<usize>,

    /// Run seed for reproducible forecasts
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run outer iterations on all cores
    #[arg(short, long, conflicts_with = "sequential")]
    parallel: bool,

    /// Run outer iterations on one thread, overriding the config file
    #[arg(long)]
    sequential: bool,
}

impl Overrides {
    fn apply(self, mut config: StockastConfig) -> StockastConfig {
        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(spot_price) = self.spot_price {
            config.spot_price = spot_price;
        }
        if let Some(time_steps) = self.time_steps {
            config.time_steps = time_steps;
        }
        if let Some(risk_free_rate) = self.risk_free_rate {
            config.risk_free_rate = risk_free_rate;
        }
        if let Some(in_loops) = self.in_loops {
            config.in_loops = in_loops;
        }
        if let Some(out_loops) = self.out_loops {
            config.out_loops = out_loops;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.parallel {
            config.parallel = true;
        } else if self.sequential {
            config.parallel = false;
        }
        config
    }
}

/// Resolves the layered configuration for one command.
fn resolve_config(path: &std::path::Path, overrides: Overrides) -> Result<StockastConfig> {
    let config = overrides.apply(StockastConfig::load_if_exists(path)?.with_env_override()?);
    config.validate()?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Forecast { overrides } => {
            let config = resolve_config(&cli.config, overrides)?;
            commands::forecast::run(&config).map(|_| ())
        }
        Commands::Volatility { overrides } => {
            let config = resolve_config(&cli.config, overrides)?;
            commands::volatility::run(&config).map(|_| ())
        }
        Commands::Check { overrides } => {
            let config = resolve_config(&cli.config, overrides)?;
            commands::check::run(&config)
        }
    }
}

/// Builds the log filter from `RUST_LOG` directives; `--verbose` raises the
/// default level to debug on top of them.
fn log_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let filter = directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialise tracing
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(cli.verbose, directives.as_deref()))
        .init();

    if cli.verbose {
        debug!("Verbose mode enabled");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("{}! Exiting..", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_forecast_flags() {
        let cli = Cli::try_parse_from([
            "stockast",
            "forecast",
            "--data",
            "prices.csv",
            "--time-steps",
            "60",
            "--seed",
            "3",
            "--parallel",
        ])
        .unwrap();

        let Commands::Forecast { overrides } = cli.command else {
            panic!("expected forecast command");
        };
        let config = overrides.apply(StockastConfig::default());
        assert_eq!(config.data_path, PathBuf::from("prices.csv"));
        assert_eq!(config.time_steps, 60);
        assert_eq!(config.seed, Some(3));
        assert!(config.parallel);
        assert_eq!(config.in_loops, 100);
    }

    #[test]
    fn test_sequential_flag_overrides_file_setting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockast.toml");
        std::fs::write(&path, "parallel = true\n").unwrap();

        let cli = Cli::try_parse_from(["stockast", "forecast", "--sequential"]).unwrap();
        let Commands::Forecast { overrides } = cli.command else {
            panic!("expected forecast command");
        };
        let config = resolve_config(&path, overrides).unwrap();
        assert!(!config.parallel);
    }

    #[test]
    fn test_parallel_conflicts_with_sequential() {
        let result = Cli::try_parse_from(["stockast", "forecast", "--parallel", "--sequential"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_applies_with_rust_log() {
        let filter = log_filter(true, Some("warn"));
        assert!(filter.to_string().contains("debug"));

        let filter = log_filter(false, Some("warn"));
        assert!(filter.to_string().contains("warn"));
        assert!(!filter.to_string().contains("debug"));
    }

    #[test]
    fn test_verbose_keeps_target_directives() {
        let filter = log_filter(true, Some("pricer_pricing=trace"));
        let rendered = filter.to_string();
        assert!(rendered.contains("pricer_pricing=trace"));
        assert!(rendered.contains("debug"));
    }

    #[test]
    fn test_default_filter_is_info() {
        assert!(log_filter(false, None).to_string().contains("info"));
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut base = StockastConfig::default();
        base.parallel = true;
        base.seed = Some(1);
        assert_eq!(Overrides::default().apply(base.clone()), base);
    }

    #[test]
    fn test_resolve_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockast.toml");
        std::fs::write(&path, "in_loops = 4\nout_loops = 5\n").unwrap();

        let config = resolve_config(
            &path,
            Overrides {
                out_loops: Some(6),
                ..Overrides::default()
            },
        )
        .unwrap();
        assert_eq!(config.in_loops, 4);
        assert_eq!(config.out_loops, 6);
    }

    #[test]
    fn test_resolve_config_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let result = resolve_config(
            &dir.path().join("absent.toml"),
            Overrides {
                time_steps: Some(1),
                ..Overrides::default()
            },
        );
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
