//! Feature flags configuration.
//!
//! This module contains the `FeaturesConfig` struct which holds
//! the switches for optional block kinds and inline rewrites.

use mdblocks_core::ParseOptions;
use serde::{Deserialize, Serialize};

/// Feature flags configuration.
///
/// Controls which markdown constructs are recognized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeaturesConfig {
    /// Recognize pipe tables.
    /// Default: true
    #[serde(default = "default_true")]
    pub tables: bool,

    /// Recognize whole-line images.
    /// Default: true
    #[serde(default = "default_true")]
    pub images: bool,

    /// Rewrite inline links and autolinks into anchors.
    /// Default: true
    #[serde(default = "default_true")]
    pub links: bool,

    /// Keep the fence info string as the code block language.
    /// Default: false
    #[serde(default)]
    pub code_language: bool,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        Self {
            tables: true,
            images: true,
            links: true,
            code_language: false,
        }
    }
}

impl FeaturesConfig {
    /// Merge another FeaturesConfig into this one.
    ///
    /// Every field is copied from `other`; missing keys in an override file
    /// already took their defaults during deserialization.
    pub fn merge(&mut self, other: &FeaturesConfig) {
        self.tables = other.tables;
        self.images = other.images;
        self.links = other.links;
        self.code_language = other.code_language;
    }

    /// The parser options these flags select.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            tables: self.tables,
            images: self.images,
            links: self.links,
            code_language: self.code_language,
        }
    }
}

fn default_true() -> bool {
    true
}
