//! Registry of property keys consulted by the experiment driver.
//!
//! Call sites name configuration values through [`ConfigKey`] (or the
//! string constants below) and never embed literal property keys.

use std::fmt::{self, Display};
use std::str::FromStr;

use seedrun_core::errors::{ConfigError, ErrorInfo};
use serde::{Deserialize, Serialize};

pub const RUNS: &str = "runs";
pub const POPULATION_SIZE: &str = "population.size";
pub const GENOME_LENGTH: &str = "genome.length";
pub const MUTATION_RATE: &str = "mutation.rate";
pub const RECOMBINATION_RATE: &str = "recombination.rate";
pub const GENERATIONS: &str = "generations";

/// Declared type of a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// 32-bit signed integer.
    Integer,
    /// Floating point number.
    Float,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
        }
    }
}

/// Logical configuration constants known to the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfigKey {
    Runs,
    PopulationSize,
    GenomeLength,
    Generations,
    MutationRate,
    RecombinationRate,
}

impl ConfigKey {
    /// Every key, in the order the constants are resolved.
    pub const ALL: [ConfigKey; 6] = [
        ConfigKey::Runs,
        ConfigKey::PopulationSize,
        ConfigKey::GenomeLength,
        ConfigKey::Generations,
        ConfigKey::MutationRate,
        ConfigKey::RecombinationRate,
    ];

    /// Property file key bound to this constant.
    pub const fn property(&self) -> &'static str {
        match self {
            ConfigKey::Runs => RUNS,
            ConfigKey::PopulationSize => POPULATION_SIZE,
            ConfigKey::GenomeLength => GENOME_LENGTH,
            ConfigKey::Generations => GENERATIONS,
            ConfigKey::MutationRate => MUTATION_RATE,
            ConfigKey::RecombinationRate => RECOMBINATION_RATE,
        }
    }

    pub const fn kind(&self) -> ValueKind {
        match self {
            ConfigKey::Runs
            | ConfigKey::PopulationSize
            | ConfigKey::GenomeLength
            | ConfigKey::Generations => ValueKind::Integer,
            ConfigKey::MutationRate | ConfigKey::RecombinationRate => ValueKind::Float,
        }
    }
}

impl Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.property())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.property() == s)
            .ok_or_else(|| {
                ConfigError::Parse(
                    ErrorInfo::new("config.unknown_key", "not a registered configuration key")
                        .with_context("key", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_keys_are_unique() {
        let mut seen: Vec<_> = ConfigKey::ALL.iter().map(ConfigKey::property).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), ConfigKey::ALL.len());
    }

    #[test]
    fn parses_property_names() {
        for key in ConfigKey::ALL {
            assert_eq!(key.to_string().parse::<ConfigKey>().unwrap(), key);
        }
        let err = "population".parse::<ConfigKey>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert_eq!(err.info().code, "config.unknown_key");
        assert_eq!(err.key(), Some("population"));
    }

    #[test]
    fn rates_are_floats() {
        assert_eq!(ConfigKey::MutationRate.kind(), ValueKind::Float);
        assert_eq!(ConfigKey::RecombinationRate.kind(), ValueKind::Float);
        assert_eq!(ConfigKey::Generations.kind(), ValueKind::Integer);
    }
}
