//! Output record assembly.
//!
//! For each catalog entry this decides whether the block has a derivable
//! color and builds the final attribute record consumed by the map renderer.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{BlockCatalog, BlockDef};
use crate::error::Result;
use crate::texture::load_texture;

/// An RGB color on the raw 0..=255 channel scale of the source textures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Derived attributes for a single block.
///
/// The five material flags are only meaningful when `opaque` is true; a
/// block without a derivable color has them forced false no matter what the
/// catalog said. `sign_material` passes through independent of opacity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    /// Alpha-weighted mean texture color, black when no color was derivable.
    pub color: Color,
    /// Whether a color could be derived from the block's texture.
    pub opaque: bool,
    pub grass: bool,
    pub foliage: bool,
    pub birch: bool,
    pub spruce: bool,
    pub water: bool,
    /// Always serialized, as `null` when unset.
    pub sign_material: Option<String>,
}

/// The complete derived table: one record per catalog identifier.
pub type BlockColors = BTreeMap<String, BlockRecord>;

/// Build the output record for a single block.
///
/// A `None` definition yields the full-default record. Otherwise the
/// resolved texture is sampled and the opacity gate applied: material flags
/// are only copied from the definition when a color was derived.
pub fn build_record(id: &str, def: Option<&BlockDef>, assets_dir: &Path) -> Result<BlockRecord> {
    let Some(def) = def else {
        return Ok(BlockRecord::default());
    };

    let mut record = BlockRecord {
        sign_material: def.sign_material.clone(),
        ..Default::default()
    };

    let color = match def.resolved_texture(id) {
        Some(texture) => load_texture(assets_dir, texture)?.mean_color(),
        None => None,
    };

    if let Some(color) = color {
        record.color = color;
        record.opaque = true;
        record.grass = def.grass;
        record.foliage = def.foliage;
        record.birch = def.birch;
        record.spruce = def.spruce;
        record.water = def.water;
    }

    Ok(record)
}

/// Build records for every block in the catalog.
///
/// Pure function of (catalog, asset directory). Any texture error aborts the
/// whole run; there is no per-block skip-and-continue.
pub fn build_records(catalog: &BlockCatalog, assets_dir: &Path) -> Result<BlockColors> {
    catalog
        .iter()
        .map(|(id, def)| Ok((id.clone(), build_record(id, def.as_ref(), assets_dir)?)))
        .collect()
}
