//! mdblocks Core
//!
//! This crate provides the block model, identifier sources, parse options
//! and error definitions shared by the mdblocks crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`], [`BlockData`], [`ListStyle`] - The Editor.js block model
//! - [`Document`] - The JSON envelope around a block sequence
//! - [`IdGenerator`], [`RandomIds`], [`SeededIds`] - Block identifier sources
//! - [`ParseOptions`] - Feature switches for the parser
//! - [`MdBlocksError`] - Error types

pub mod block;
pub mod error;
pub mod ids;
pub mod options;

pub use block::{to_json, Block, BlockData, Document, ImageFile, ListStyle, EDITOR_JS_VERSION};
pub use error::{MdBlocksError, Result};
pub use ids::{IdGenerator, RandomIds, SeededIds, DEFAULT_ID_LENGTH, ID_ALPHABET};
pub use options::ParseOptions;
