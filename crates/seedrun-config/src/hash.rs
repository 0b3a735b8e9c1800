use seedrun_core::errors::{ConfigError, ErrorInfo};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::constants::Constants;

/// Hashed view of [`Constants`]. Rates are stored as raw bits so that
/// non-finite values stay distinct.
#[derive(Serialize)]
struct FingerprintPayload {
    runs: i32,
    population_size: i32,
    genome_length: i32,
    generations: i32,
    mutation_rate_bits: u64,
    recombination_rate_bits: u64,
}

/// Computes a stable hexadecimal hash for the provided serializable payload.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    let bytes = serde_json::to_vec(value).map_err(|err| {
        ConfigError::Serde(
            ErrorInfo::new("config.serde", "failed to serialize payload for hashing")
                .with_hint(err.to_string()),
        )
    })?;
    let digest = Sha256::digest(bytes);
    Ok(format!("{:x}", digest))
}

impl Constants {
    /// Fingerprint of the resolved configuration, recorded in run provenance.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        stable_hash_string(&FingerprintPayload {
            runs: self.runs(),
            population_size: self.population_size(),
            genome_length: self.genome_length(),
            generations: self.generations(),
            mutation_rate_bits: self.mutation_rate().to_bits(),
            recombination_rate_bits: self.recombination_rate().to_bits(),
        })
    }
}
