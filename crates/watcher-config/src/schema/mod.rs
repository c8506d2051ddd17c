//! Configuration schema types for Watcher.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the built-in persona and model defaults.

mod model;
mod persona;
mod system;

pub use model::*;
pub use persona::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Watcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WatcherConfig {
    pub model: ModelConfig,
    pub persona: PersonaConfig,
    pub status: StatusConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
