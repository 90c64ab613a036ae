//! CLI commands for COL ↔ OBJ conversion

use std::path::Path;

use crate::converter::{convert_col_to_obj, convert_obj_to_col};

/// Convert a COL file to Wavefront OBJ.
pub fn to_obj(source: &Path, destination: &Path) -> anyhow::Result<()> {
    convert_col_to_obj(source, destination)?;
    println!("Wrote {}", destination.display());
    Ok(())
}

/// Build a COL file from a Wavefront OBJ.
pub fn from_obj(source: &Path, destination: &Path, scale: f32) -> anyhow::Result<()> {
    convert_obj_to_col(source, destination, scale)?;
    println!("Wrote {}", destination.display());
    Ok(())
}
