//! Property file loading and typed experiment constants.

mod constants;
mod hash;
pub mod keys;
mod properties;

pub use constants::{initialize_config, ConstantValue, Constants, DEFAULT_CONFIG_PATH};
pub use hash::stable_hash_string;
pub use keys::{ConfigKey, ValueKind};
pub use properties::{PropertyStore, COMMENT_MARKERS, SEPARATORS};
pub use seedrun_core::errors::{ConfigError, ErrorInfo};
