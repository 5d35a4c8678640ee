//! Forecast configuration management.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults (the reference run)
//! 2. TOML file (`stockast.toml` unless `--config` says otherwise)
//! 3. `STOCKAST_*` environment variables
//! 4. Command-line flags

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_pricing::mc::config::{
    DEFAULT_IN_LOOPS, DEFAULT_OUT_LOOPS, DEFAULT_RISK_FREE_RATE, DEFAULT_SPOT_PRICE,
    DEFAULT_TIME_STEPS,
};
use pricer_pricing::mc::SimulationConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Prefix shared by all environment overrides.
pub const ENV_PREFIX: &str = "STOCKAST_";

/// Forecast configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StockastConfig {
    /// Price at time zero
    pub spot_price: f64,

    /// Prices per trajectory, including the spot
    pub time_steps: usize,

    /// Risk-free rate (GBM drift)
    pub risk_free_rate: f64,

    /// Paths averaged per outer iteration
    pub in_loops: usize,

    /// Outer iterations
    pub out_loops: usize,

    /// Run seed; a random seed is drawn when absent
    pub seed: Option<u64>,

    /// Run outer iterations in parallel
    pub parallel: bool,

    /// Historical price file
    pub data_path: PathBuf,

    /// Forecast output file
    pub output_path: PathBuf,
}

impl Default for StockastConfig {
    fn default() -> Self {
        Self {
            spot_price: DEFAULT_SPOT_PRICE,
            time_steps: DEFAULT_TIME_STEPS,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            in_loops: DEFAULT_IN_LOOPS,
            out_loops: DEFAULT_OUT_LOOPS,
            seed: None,
            parallel: false,
            data_path: PathBuf::from("data.csv"),
            output_path: PathBuf::from("opt.csv"),
        }
    }
}

impl StockastConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from `path` if it exists, defaults otherwise
    pub fn load_if_exists(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!(path = %path.display(), "Loading configuration file");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply `STOCKAST_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by full variable name
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{}{}", ENV_PREFIX, name);
            lookup(&key).map(|value| (key, value))
        };

        if let Some(entry) = var("SPOT_PRICE") {
            self.spot_price = parse_env(entry)?;
        }
        if let Some(entry) = var("TIME_STEPS") {
            self.time_steps = parse_env(entry)?;
        }
        if let Some(entry) = var("RISK_FREE_RATE") {
            self.risk_free_rate = parse_env(entry)?;
        }
        if let Some(entry) = var("IN_LOOPS") {
            self.in_loops = parse_env(entry)?;
        }
        if let Some(entry) = var("OUT_LOOPS") {
            self.out_loops = parse_env(entry)?;
        }
        if let Some(entry) = var("SEED") {
            self.seed = Some(parse_env(entry)?);
        }
        if let Some(entry) = var("PARALLEL") {
            self.parallel = parse_env(entry)?;
        }
        if let Some((_, value)) = var("DATA_PATH") {
            self.data_path = PathBuf::from(value);
        }
        if let Some((_, value)) = var("OUTPUT_PATH") {
            self.output_path = PathBuf::from(value);
        }

        Ok(self)
    }

    /// Build the validated engine configuration
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        Ok(SimulationConfig::builder()
            .spot_price(self.spot_price)
            .time_steps(self.time_steps)
            .risk_free_rate(self.risk_free_rate)
            .in_loops(self.in_loops)
            .out_loops(self.out_loops)
            .maybe_seed(self.seed)
            .parallel(self.parallel)
            .build()?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("data_path"));
        }
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPath("output_path"));
        }
        self.simulation_config().map(|_| ())
    }
}

fn parse_env<T: FromStr>((key, value): (String, String)) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Env { key, value })
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("Cannot read {}: {}", .path.display(), .source)]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parse error in config file
    #[error("Cannot parse {}: {}", .path.display(), .source)]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Environment variable holds an unparseable value
    #[error("Invalid value '{value}' for {key}")]
    Env {
        /// Variable name
        key: String,
        /// Rejected value
        value: String,
    },

    /// A required path is empty
    #[error("{0} cannot be empty")]
    EmptyPath(&'static str),

    /// Engine configuration rejected the values
    #[error(transparent)]
    Simulation(#[from] pricer_pricing::mc::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StockastConfig::default();
        assert_eq!(config.in_loops, 100);
        assert_eq!(config.out_loops, 10_000);
        assert_eq!(config.time_steps, 180);
        assert_eq!(config.risk_free_rate, 0.001);
        assert_eq!(config.spot_price, 100.0);
        assert_eq!(config.data_path, PathBuf::from("data.csv"));
        assert_eq!(config.output_path, PathBuf::from("opt.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StockastConfig::from_toml(
            r#"
            time_steps = 60
            seed = 7
            parallel = true
            output_path = "out/forecast.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.time_steps, 60);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
        assert_eq!(config.output_path, PathBuf::from("out/forecast.csv"));
        assert_eq!(config.in_loops, 100);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(StockastConfig::from_toml("time_step = 60").is_err());
    }

    #[test]
    fn test_load_if_exists_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = StockastConfig::load_if_exists(&dir.path().join("stockast.toml")).unwrap();
        assert_eq!(config, StockastConfig::default());
    }

    #[test]
    fn test_load_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockast.toml");
        std::fs::write(&path, "in_loops = \"many\"").unwrap();

        let err = StockastConfig::load_if_exists(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides_applied() {
        let config = StockastConfig::default()
            .with_overrides(lookup(&[
                ("STOCKAST_IN_LOOPS", "10"),
                ("STOCKAST_OUT_LOOPS", " 20 "),
                ("STOCKAST_SEED", "99"),
                ("STOCKAST_PARALLEL", "true"),
                ("STOCKAST_DATA_PATH", "/tmp/prices.csv"),
            ]))
            .unwrap();

        assert_eq!(config.in_loops, 10);
        assert_eq!(config.out_loops, 20);
        assert_eq!(config.seed, Some(99));
        assert!(config.parallel);
        assert_eq!(config.data_path, PathBuf::from("/tmp/prices.csv"));
        assert_eq!(config.time_steps, 180);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = StockastConfig::default()
            .with_overrides(lookup(&[("STOCKAST_TIME_STEPS", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { ref key, .. } if key == "STOCKAST_TIME_STEPS"));
    }

    #[test]
    fn test_validation_errors() {
        let mut config = StockastConfig::default();
        config.time_steps = 1;
        assert!(matches!(config.validate(), Err(ConfigError::Simulation(_))));

        let mut config = StockastConfig::default();
        config.data_path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyPath("data_path"))
        ));
    }

    #[test]
    fn test_simulation_config_mapping() {
        let mut config = StockastConfig::default();
        config.seed = Some(5);
        config.in_loops = 3;

        let sim = config.simulation_config().unwrap();
        assert_eq!(sim.seed(), Some(5));
        assert_eq!(sim.in_loops(), 3);
        assert_eq!(sim.out_loops(), 10_000);
    }
}
