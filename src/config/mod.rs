//! Configuration with YAML schema and validation.
//!
//! Type-safe structs with `deny_unknown_fields`, field-level checks via
//! `validator`, then semantic checks across fields.
//!
//! ```yaml
//! schema_version: "1.0"
//! algorithm: insertion
//! data:
//!   source: random
//!   size: 8
//!   min: 1
//!   max: 50
//!   seed: 42
//! playback:
//!   step_delay_ms: 800
//!   exchange_ms: 600
//! logging:
//!   filter: info
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::{self, SeqRng};
use crate::error::{VizError, VizResult};
use crate::sorting::Algorithm;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Algorithm selected at startup.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Where the initial sequence comes from.
    #[validate(nested)]
    #[serde(default)]
    pub data: DataConfig,

    /// Playback timing.
    #[validate(nested)]
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Log filter.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            algorithm: Algorithm::default(),
            data: DataConfig::default(),
            playback: PlaybackConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Run field and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first failing check.
    pub fn check(&self) -> VizResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    fn validate_semantic(&self) -> VizResult<()> {
        if self.data.min > self.data.max {
            return Err(VizError::config(format!(
                "data.min ({}) must not exceed data.max ({})",
                self.data.min, self.data.max
            )));
        }
        if self.data.source == DataSource::Values && self.data.values.is_empty() {
            return Err(VizError::config(
                "data.source 'values' requires a non-empty data.values list",
            ));
        }
        Ok(())
    }

    /// RNG for random data, seeded from config or the clock.
    #[must_use]
    pub fn rng(&self) -> SeqRng {
        self.data.seed.map_or_else(SeqRng::from_clock, SeqRng::new)
    }

    /// Sequence to load at startup.
    #[must_use]
    pub fn initial_sequence(&self, rng: &mut SeqRng) -> Vec<i64> {
        match self.data.source {
            DataSource::Random => {
                data::random_sequence(rng, self.data.size, self.data.min, self.data.max)
            }
            DataSource::Sample => data::sample_for(self.algorithm),
            DataSource::Values => self.data.values.clone(),
        }
    }

    /// Post-step display delay.
    #[must_use]
    pub const fn step_delay(&self) -> Duration {
        Duration::from_millis(self.playback.step_delay_ms)
    }

    /// Length of one exchange animation.
    #[must_use]
    pub const fn exchange_duration(&self) -> Duration {
        Duration::from_millis(self.playback.exchange_ms)
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct VizConfigBuilder {
    algorithm: Option<Algorithm>,
    seed: Option<u64>,
    values: Option<Vec<i64>>,
    sample: bool,
    size: Option<usize>,
    step_delay_ms: Option<u64>,
}

impl VizConfigBuilder {
    /// Select the algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Seed random data.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a fixed sequence.
    #[must_use]
    pub fn values(mut self, values: Vec<i64>) -> Self {
        self.values = Some(values);
        self
    }

    /// Use the sample data of the selected algorithm.
    #[must_use]
    pub const fn sample(mut self) -> Self {
        self.sample = true;
        self
    }

    /// Number of random elements.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Post-step delay in milliseconds.
    #[must_use]
    pub const fn step_delay_ms(mut self, ms: u64) -> Self {
        self.step_delay_ms = Some(ms);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        let mut config = VizConfig::default();

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(seed) = self.seed {
            config.data.seed = Some(seed);
        }
        if let Some(size) = self.size {
            config.data.size = size;
        }
        if self.sample {
            config.data.source = DataSource::Sample;
        }
        if let Some(values) = self.values {
            config.data.source = DataSource::Values;
            config.data.values = values;
        }
        if let Some(ms) = self.step_delay_ms {
            config.playback.step_delay_ms = ms;
        }

        config
    }
}

/// Origin of the initial sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Random values in `min..=max`.
    #[default]
    Random,
    /// Per-algorithm sample set.
    Sample,
    /// Explicit `values` list.
    Values,
}

/// Initial sequence settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Origin of the sequence.
    #[serde(default)]
    pub source: DataSource,
    /// Number of random elements.
    #[validate(range(min = 1, max = 32))]
    #[serde(default = "default_size")]
    pub size: usize,
    /// Smallest random value.
    #[serde(default = "default_min")]
    pub min: i64,
    /// Largest random value.
    #[serde(default = "default_max")]
    pub max: i64,
    /// Seed for random values; the clock is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Explicit sequence for `source: values`.
    #[validate(length(max = 32))]
    #[serde(default)]
    pub values: Vec<i64>,
}

const fn default_size() -> usize {
    data::SAMPLE_SIZE
}

const fn default_min() -> i64 {
    data::DEFAULT_MIN
}

const fn default_max() -> i64 {
    data::DEFAULT_MAX
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Random,
            size: default_size(),
            min: default_min(),
            max: default_max(),
            seed: None,
            values: Vec::new(),
        }
    }
}

/// Playback timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Minimum time a step stays on screen.
    #[validate(range(max = 5000))]
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
    /// Length of an exchange animation.
    #[validate(range(max = 5000))]
    #[serde(default = "default_exchange_ms")]
    pub exchange_ms: u64,
    /// Start stepping automatically in the terminal front end.
    #[serde(default)]
    pub autoplay: bool,
}

const fn default_step_delay_ms() -> u64 {
    800
}

const fn default_exchange_ms() -> u64 {
    600
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
            exchange_ms: default_exchange_ms(),
            autoplay: false,
        }
    }
}

/// Log filter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = VizConfig::default();
        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.algorithm, Algorithm::Bubble);
        assert_eq!(config.data.size, 8);
        assert_eq!(config.step_delay(), Duration::from_millis(800));
        assert_eq!(config.exchange_duration(), Duration::from_millis(600));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
algorithm: selection
data:
  source: random
  size: 5
  seed: 42
playback:
  step_delay_ms: 100
";
        let config = VizConfig::from_yaml(yaml).expect("parse");
        assert_eq!(config.algorithm, Algorithm::Selection);
        assert_eq!(config.data.size, 5);
        assert_eq!(config.data.seed, Some(42));
        assert_eq!(config.playback.exchange_ms, 600);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = VizConfig::from_yaml("{}").expect("parse");
        assert_eq!(config, VizConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = VizConfig::from_yaml("algorithm: bubble\nspeed: 3\n");
        assert!(matches!(result, Err(VizError::YamlParse(_))));
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        assert!(VizConfig::from_yaml("algorithm: quick\n").is_err());
    }

    #[test]
    fn test_validation_fails_oversized() {
        let result = VizConfig::from_yaml("data:\n  size: 100\n");
        assert!(matches!(result, Err(VizError::Validation(_))));
    }

    #[test]
    fn test_validation_fails_zero_size() {
        let result = VizConfig::from_yaml("data:\n  size: 0\n");
        assert!(matches!(result, Err(VizError::Validation(_))));
    }

    #[test]
    fn test_validation_fails_inverted_range() {
        let result = VizConfig::from_yaml("data:\n  min: 10\n  max: 1\n");
        assert!(matches!(result, Err(VizError::Config { .. })));
    }

    #[test]
    fn test_values_source_requires_values() {
        let result = VizConfig::from_yaml("data:\n  source: values\n");
        assert!(matches!(result, Err(VizError::Config { .. })));
    }

    #[test]
    fn test_validation_fails_long_delay() {
        let result = VizConfig::from_yaml("playback:\n  step_delay_ms: 99999\n");
        assert!(matches!(result, Err(VizError::Validation(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = VizConfig::builder()
            .algorithm(Algorithm::Insertion)
            .values(vec![3, 2, 1])
            .step_delay_ms(0)
            .build();
        assert_eq!(config.algorithm, Algorithm::Insertion);
        assert_eq!(config.data.source, DataSource::Values);
        assert_eq!(config.initial_sequence(&mut config.rng()), vec![3, 2, 1]);
        assert_eq!(config.step_delay(), Duration::ZERO);
    }

    #[test]
    fn test_sample_source_follows_algorithm() {
        let config = VizConfig::builder()
            .algorithm(Algorithm::Selection)
            .sample()
            .build();
        let values = config.initial_sequence(&mut config.rng());
        assert_eq!(values, data::sample_for(Algorithm::Selection));
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let config = VizConfig::builder().seed(7).size(6).build();
        let a = config.initial_sequence(&mut config.rng());
        let b = config.initial_sequence(&mut config.rng());
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn test_config_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "algorithm: insertion\ndata:\n  source: sample").expect("write");

        let config = VizConfig::load(file.path()).expect("load");
        assert_eq!(config.algorithm, Algorithm::Insertion);
        assert_eq!(config.data.source, DataSource::Sample);
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = VizConfig::load("/nonexistent/sortstep.yaml");
        assert!(matches!(result, Err(VizError::Io(_))));
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = VizConfig::builder().algorithm(Algorithm::Selection).seed(3).build();
        let yaml = serde_yaml::to_string(&config).expect("serialize");
        let restored = VizConfig::from_yaml(&yaml).expect("parse");
        assert_eq!(restored, config);
    }
}
