//! Provenance descriptor attached to every seeded run.

use serde::{Deserialize, Serialize};

use crate::rng::derive_run_seed;

/// Provenance information identifying a single seeded run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Path of the property file the run was configured from.
    pub config_path: String,
    /// Fingerprint of the resolved configuration.
    pub config_hash: String,
    /// Run index, used as the first seed.
    pub seed: u64,
    /// Seed of the generator the run actually consumed.
    pub derived_seed: u64,
}

impl RunProvenance {
    /// Builds the provenance record for run `seed`.
    pub fn for_run(
        config_path: impl Into<String>,
        config_hash: impl Into<String>,
        seed: u64,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            config_hash: config_hash.into(),
            seed,
            derived_seed: derive_run_seed(seed),
        }
    }
}
