#![deny(missing_docs)]
#![doc = "Shared error types, deterministic seeding and provenance for seedrun experiments."]

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ConfigError, ErrorInfo};
pub use provenance::RunProvenance;
pub use rng::{derive_run_seed, RngHandle, RESEED_BOUND};
