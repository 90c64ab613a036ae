//! Wavefront OBJ subset for collision meshes
//!
//! Just enough OBJ to round-trip collision geometry through external tools:
//! `v`, `f`, and `usemtl` statements. Collision classification rides in the
//! material name as comma-separated values — `"5,2,0"` for collision type 5,
//! terrain type 2, unknown 0, and `"5,2,0,8000"` when the triangle carries a
//! parameter — the names Blender collision tools assign to imported
//! collision materials.

mod reader;
mod writer;

pub use reader::{parse_obj_str, read_obj};
pub use writer::{write_obj, write_obj_to};

use glam::Vec3;

/// One triangle of an OBJ document, with the material active at its `f`
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjFace {
    /// 0-based vertex indices (the file itself is 1-based).
    pub indices: [usize; 3],
    pub material: Option<String>,
}

/// A parsed OBJ document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjDocument {
    pub positions: Vec<Vec3>,
    pub faces: Vec<ObjFace>,
}

/// Collision classification carried by a material name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionClass {
    pub col_type: u16,
    pub terrain_type: u8,
    pub unknown: u8,
    pub col_parameter: Option<u16>,
}

impl CollisionClass {
    /// Encode as a material name: `"colType,terrainType,unknown[,parameter]"`.
    pub fn material_name(&self) -> String {
        match self.col_parameter {
            Some(parameter) => format!(
                "{},{},{},{}",
                self.col_type, self.terrain_type, self.unknown, parameter
            ),
            None => format!("{},{},{}", self.col_type, self.terrain_type, self.unknown),
        }
    }

    /// Decode a material name produced by [`material_name`]. Returns `None`
    /// for names in any other convention; callers fall back to the all-zero
    /// class.
    ///
    /// [`material_name`]: Self::material_name
    pub fn from_material_name(name: &str) -> Option<Self> {
        let mut parts = name.split(',');
        let col_type = parts.next()?.trim().parse().ok()?;
        let terrain_type = parts.next()?.trim().parse().ok()?;
        let unknown = parts.next()?.trim().parse().ok()?;
        let col_parameter = match parts.next() {
            Some(part) => Some(part.trim().parse().ok()?),
            None => None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            col_type,
            terrain_type,
            unknown,
            col_parameter,
        })
    }
}
