//! Wavefront OBJ to COL conversion

use std::path::Path;

use crate::error::Result;
use crate::formats::col::write_col;
use crate::formats::obj::{read_obj, CollisionClass};
use crate::scene::{flatten_scene, SceneFace, SceneMesh};

/// Convert a Wavefront .obj file to a .col file.
///
/// Material names in the `"colType,terrainType,unknown[,parameter]"`
/// convention classify their faces; faces with any other material, or none,
/// get the all-zero classification. `scale` is applied to every vertex on
/// the way into game space.
///
/// # Errors
/// Returns an error if parsing fails or the mesh exceeds the format's index
/// and count ranges.
pub fn convert_obj_to_col<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    scale: f32,
) -> Result<()> {
    tracing::info!(
        "Converting OBJ→COL: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let document = read_obj(source)?;
    let mesh = SceneMesh {
        positions: document.positions,
        faces: document
            .faces
            .iter()
            .map(|face| {
                let class = face
                    .material
                    .as_deref()
                    .and_then(CollisionClass::from_material_name)
                    .unwrap_or_default();
                SceneFace {
                    indices: face.indices,
                    col_type: class.col_type,
                    terrain_type: class.terrain_type,
                    unknown: class.unknown,
                    col_parameter: class.col_parameter,
                }
            })
            .collect(),
    };

    let model = flatten_scene(&[mesh], scale)?;
    write_col(dest, &model)?;
    tracing::info!("Conversion complete");
    Ok(())
}
