//! Block catalog loading and parsing.
//!
//! The catalog is a JSON object mapping block identifiers to either `null`
//! (no definition, all defaults) or an object of optional fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExtractError, Result};

/// A loaded block catalog: identifier to definition-or-absent.
///
/// A `BTreeMap` keeps iteration (and thus output serialization) in a
/// deterministic order, so repeated runs on unchanged inputs produce
/// byte-identical output.
pub type BlockCatalog = BTreeMap<String, Option<BlockDef>>;

/// Per-block metadata as found in the catalog.
///
/// Every field is optional; missing fields take the documented defaults and
/// unrecognized fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlockDef {
    /// Texture name override. An omitted field falls back to the block
    /// identifier; an explicit `null` means the block has no texture.
    #[serde(deserialize_with = "some_texture")]
    pub texture: Option<Option<String>>,
    /// Tinted by the biome grass color.
    pub grass: bool,
    /// Tinted by the biome foliage color.
    pub foliage: bool,
    /// Tinted by the birch foliage color.
    pub birch: bool,
    /// Tinted by the spruce foliage color.
    pub spruce: bool,
    /// Rendered as water.
    pub water: bool,
    /// Wood type for sign blocks, if this block is a sign.
    pub sign_material: Option<String>,
}

impl BlockDef {
    /// Resolve the texture name for this definition.
    ///
    /// The `texture` field wins when set, otherwise the block identifier
    /// names the texture. An explicit `null` or empty resolved name means
    /// the block has no texture at all, so sampling is skipped entirely.
    pub fn resolved_texture<'a>(&'a self, id: &'a str) -> Option<&'a str> {
        let name = match &self.texture {
            None => id,
            Some(None) => return None,
            Some(Some(name)) => name.as_str(),
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Keeps an omitted `texture` field distinguishable from an explicit `null`:
/// a present field always deserializes to `Some`, with the inner `Option`
/// carrying the null.
fn some_texture<'de, D>(deserializer: D) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Load a block catalog from a JSON file.
///
/// A missing or unreadable catalog file is reported as a malformed catalog
/// rather than a bare I/O error, so the diagnostic names the file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<BlockCatalog> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|err| {
        ExtractError::MalformedCatalog(format!("cannot read {}: {err}", path.display()))
    })?;
    parse_catalog(&contents)
}

/// Parse a block catalog from a JSON string.
pub fn parse_catalog(contents: &str) -> Result<BlockCatalog> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_object() {
        return Err(ExtractError::MalformedCatalog(
            "expected a top-level JSON object".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}
