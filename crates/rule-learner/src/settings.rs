//! RIPPER Engine Configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Metric used to decide whether dropping a condition improves a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PruningMetric {
    /// (p + (N - n)) / (P + N) over the prune set
    #[serde(rename = "IREP_default")]
    IrepDefault,
    /// (p - n) / (p + n) over the prune set
    #[serde(rename = "RIPPER_default")]
    RipperDefault,
}

impl PruningMetric {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PruningMetric::IrepDefault => "IREP_default",
            PruningMetric::RipperDefault => "RIPPER_default",
        }
    }
}

impl fmt::Display for PruningMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PruningMetric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IREP_default" => Ok(PruningMetric::IrepDefault),
            "RIPPER_default" => Ok(PruningMetric::RipperDefault),
            other => Err(ConfigError::InvalidPruningMetric(other.to_string())),
        }
    }
}

/// Constructor arguments accepted by a RIPPER engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RipperConfig {
    /// Fraction of examples used for growing rules; the rest is the prune set
    pub split_ratio: f64,

    /// Seed for the grow/prune shuffles (None = seed from OS entropy)
    pub random_state: Option<u64>,

    /// Features with at most this many unique values are treated as categorical
    pub categorical_max: usize,

    /// Description-length slack in bits before rule growing stops
    pub difference: usize,

    /// Maximum conditions per rule (None = unbounded)
    pub rule_size: Option<usize>,

    /// Maximum rules per ruleset (None = unbounded)
    pub ruleset_size: Option<usize>,

    /// Number of optimisation passes over the learned ruleset
    pub k: usize,

    pub prune_rules: bool,

    pub n_threads: usize,

    pub pruning_metric: PruningMetric,
}

impl Default for RipperConfig {
    fn default() -> Self {
        Self {
            split_ratio: 2.0 / 3.0,
            random_state: None,
            categorical_max: 0,
            difference: 64,
            rule_size: None,
            ruleset_size: None,
            k: 2,
            prune_rules: true,
            n_threads: 1,
            pruning_metric: PruningMetric::RipperDefault,
        }
    }
}

impl RipperConfig {
    /// Defaults with the IREP pruning metric
    pub fn irep_style() -> Self {
        Self {
            pruning_metric: PruningMetric::IrepDefault,
            ..Default::default()
        }
    }

    /// Fix the random seed
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Load a configuration file (TOML, JSON, YAML, ...), format taken from the extension
    ///
    /// Keys absent from the file keep their default values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading learner configuration from {}", path.display());

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        let config: Self = settings.try_deserialize()?;

        debug!("Loaded learner configuration: {:?}", config);
        Ok(config)
    }

    /// Range checks an engine can run before training
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return Err(ConfigError::InvalidSplitRatio(self.split_ratio));
        }
        if self.n_threads == 0 {
            return Err(ConfigError::InvalidThreads);
        }
        if self.k == 0 {
            return Err(ConfigError::InvalidK);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = RipperConfig::default();
        assert!((config.split_ratio - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(config.difference, 64);
        assert_eq!(config.k, 2);
        assert_eq!(config.n_threads, 1);
        assert!(config.prune_rules);
        assert_eq!(config.pruning_metric, PruningMetric::RipperDefault);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_irep_style() {
        let config = RipperConfig::irep_style();
        assert_eq!(config.pruning_metric, PruningMetric::IrepDefault);
        assert_eq!(config.k, 2);
    }

    #[test]
    fn test_pruning_metric_parse() {
        assert_eq!(
            "IREP_default".parse::<PruningMetric>().unwrap(),
            PruningMetric::IrepDefault
        );
        assert_eq!(
            "RIPPER_default".parse::<PruningMetric>().unwrap(),
            PruningMetric::RipperDefault
        );
        assert!(matches!(
            "accuracy".parse::<PruningMetric>(),
            Err(ConfigError::InvalidPruningMetric(name)) if name == "accuracy"
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = RipperConfig {
            split_ratio: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSplitRatio(_))
        ));

        config.split_ratio = f64::NAN;
        assert!(config.validate().is_err());

        config.split_ratio = 0.5;
        config.n_threads = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidThreads)));

        config.n_threads = 4;
        config.k = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidK)));
    }

    #[test]
    fn test_json_uses_engine_metric_names() {
        let config = RipperConfig::default().with_random_state(42);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["pruning_metric"], "RIPPER_default");
        assert_eq!(json["random_state"], 42);

        let partial: RipperConfig =
            serde_json::from_str(r#"{"k": 5, "pruning_metric": "IREP_default"}"#).unwrap();
        assert_eq!(partial.k, 5);
        assert_eq!(partial.pruning_metric, PruningMetric::IrepDefault);
        assert_eq!(partial.difference, 64);
    }

    #[test]
    fn test_from_file_toml() {
        let path = std::env::temp_dir().join(format!(
            "rule-learner-config-{}.toml",
            std::process::id()
        ));
        fs::write(
            &path,
            "split_ratio = 0.5\nrandom_state = 7\nprune_rules = false\npruning_metric = \"IREP_default\"\n",
        )
        .unwrap();

        let config = RipperConfig::from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.split_ratio, 0.5);
        assert_eq!(config.random_state, Some(7));
        assert!(!config.prune_rules);
        assert_eq!(config.pruning_metric, PruningMetric::IrepDefault);
        assert_eq!(config.n_threads, 1);
    }

    #[test]
    fn test_from_file_missing() {
        let result = RipperConfig::from_file("/nonexistent/ripper.toml");
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
