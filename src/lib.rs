//! # Block Colors
//!
//! A Rust library for deriving representative block colors from texture
//! assets.
//!
//! ## Overview
//!
//! This library takes a JSON block catalog and a directory of PNG textures
//! as input, and produces a JSON table mapping each block identifier to its
//! alpha-weighted mean texture color plus a fixed set of attribute flags
//! (opacity, biome tinting, sign material). The table is consumed later by a
//! map renderer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use block_colors::{extract_colors, write_colors};
//!
//! // Derive colors for every block in the catalog
//! let colors = extract_colors("blocks.json", "assets/")?;
//!
//! // Write the derived table
//! write_colors(&colors, "colors.json")?;
//! ```
//!
//! The pipeline is a single pass with no intermediate state: catalog loading,
//! texture sampling, record assembly, and output serialization run in order,
//! and the first error aborts the whole run before any output is written.

pub mod catalog;
pub mod error;
pub mod export;
pub mod record;
pub mod texture;

// Re-export main types for convenience
pub use catalog::{load_catalog, BlockCatalog, BlockDef};
pub use error::{ExtractError, Result};
pub use export::write_colors;
pub use record::{build_records, BlockColors, BlockRecord, Color};
pub use texture::TextureData;

use std::path::Path;

/// Derive the color table for every block in a catalog file.
///
/// Loads the catalog from `catalog_path`, samples each block's texture from
/// `assets_dir`, and returns the assembled records keyed by identifier.
pub fn extract_colors<P, Q>(catalog_path: P, assets_dir: Q) -> Result<BlockColors>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let catalog = load_catalog(catalog_path)?;
    build_records(&catalog, assets_dir.as_ref())
}
