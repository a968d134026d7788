//! Output configuration: envelope version, identifier length, formatting.

use mdblocks_core::{DEFAULT_ID_LENGTH, EDITOR_JS_VERSION};
use serde::{Deserialize, Serialize};

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputConfig {
    /// Block schema version written into the envelope
    #[serde(default = "default_version")]
    pub version: String,

    /// Length of generated block identifiers
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Pretty-print the JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            id_length: default_id_length(),
            pretty: default_pretty(),
        }
    }
}

impl OutputConfig {
    pub fn merge(&mut self, other: &OutputConfig) {
        self.version = other.version.clone();
        self.id_length = other.id_length;
        self.pretty = other.pretty;
    }
}

fn default_version() -> String {
    EDITOR_JS_VERSION.to_string()
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

fn default_pretty() -> bool {
    true
}
