//! Typed constants resolved once from the property file.

use std::path::Path;
use std::str::FromStr;

use seedrun_core::errors::{ConfigError, ErrorInfo};
use tracing::info;

use crate::keys::{ConfigKey, ValueKind};
use crate::properties::PropertyStore;

/// Default configuration path used when none is supplied.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.properties";

/// Immutable experiment parameters.
///
/// A value only exists once every registered key has been resolved and
/// coerced, so holders never observe a partially initialised configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    runs: i32,
    population_size: i32,
    genome_length: i32,
    generations: i32,
    mutation_rate: f64,
    recombination_rate: f64,
}

/// A resolved constant together with its declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstantValue {
    Integer(i32),
    Float(f64),
}

impl ConstantValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ConstantValue::Integer(_) => ValueKind::Integer,
            ConstantValue::Float(_) => ValueKind::Float,
        }
    }
}

/// Loads `path` and resolves every registered constant.
pub fn initialize_config(path: impl AsRef<Path>) -> Result<Constants, ConfigError> {
    let path = path.as_ref();
    let store = PropertyStore::load(path)?;
    let constants = Constants::from_store(&store)?;
    info!(
        path = %path.display(),
        keys = store.len(),
        overridden = store.overridden(),
        "configuration initialised"
    );
    Ok(constants)
}

impl Constants {
    /// Resolves every key in [`ConfigKey::ALL`] order from `store`.
    pub fn from_store(store: &PropertyStore) -> Result<Self, ConfigError> {
        Ok(Self {
            runs: resolve(store, ConfigKey::Runs)?,
            population_size: resolve(store, ConfigKey::PopulationSize)?,
            genome_length: resolve(store, ConfigKey::GenomeLength)?,
            generations: resolve(store, ConfigKey::Generations)?,
            mutation_rate: resolve(store, ConfigKey::MutationRate)?,
            recombination_rate: resolve(store, ConfigKey::RecombinationRate)?,
        })
    }

    pub fn runs(&self) -> i32 {
        self.runs
    }

    pub fn population_size(&self) -> i32 {
        self.population_size
    }

    pub fn genome_length(&self) -> i32 {
        self.genome_length
    }

    pub fn generations(&self) -> i32 {
        self.generations
    }

    pub fn mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn recombination_rate(&self) -> f64 {
        self.recombination_rate
    }

    /// Looks up a constant by its logical key.
    pub fn get(&self, key: ConfigKey) -> ConstantValue {
        match key {
            ConfigKey::Runs => ConstantValue::Integer(self.runs),
            ConfigKey::PopulationSize => ConstantValue::Integer(self.population_size),
            ConfigKey::GenomeLength => ConstantValue::Integer(self.genome_length),
            ConfigKey::Generations => ConstantValue::Integer(self.generations),
            ConfigKey::MutationRate => ConstantValue::Float(self.mutation_rate),
            ConfigKey::RecombinationRate => ConstantValue::Float(self.recombination_rate),
        }
    }

    /// Iterates all constants in resolution order.
    pub fn entries(&self) -> impl Iterator<Item = (ConfigKey, ConstantValue)> + '_ {
        ConfigKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

fn resolve<T: FromStr>(store: &PropertyStore, key: ConfigKey) -> Result<T, ConfigError> {
    let raw = store.get(key.property())?;
    raw.parse::<T>().map_err(|_| {
        let expected = key.kind().as_str();
        ConfigError::Format(
            ErrorInfo::new("config.format", format!("value is not a valid {expected}"))
                .with_context("key", key.property())
                .with_context("value", raw)
                .with_context("expected", expected),
        )
    })
}
