//! Output serialization.

use std::path::Path;

use crate::error::Result;
use crate::record::BlockColors;

/// Serialize the complete color table to a JSON file.
///
/// The document is serialized in memory and written with a single
/// truncate-write, so a partially written output file is never left behind.
pub fn write_colors<P: AsRef<Path>>(colors: &BlockColors, path: P) -> Result<()> {
    let json = serde_json::to_string(colors)?;
    std::fs::write(path, json)?;
    Ok(())
}
