//! COL to Wavefront OBJ conversion

use std::path::Path;

use crate::error::Result;
use crate::formats::col::read_col;
use crate::formats::obj::{write_obj, CollisionClass, ObjDocument, ObjFace};
use crate::scene::model_to_scene;

/// Convert a .col file to a Wavefront .obj file.
///
/// Each face's collision classification is preserved in its material name
/// (see [`CollisionClass::material_name`]).
///
/// # Errors
/// Returns an error if reading, parsing, or writing fails.
pub fn convert_col_to_obj<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    tracing::info!(
        "Converting COL→OBJ: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let model = read_col(source)?;
    let (positions, faces) = model_to_scene(&model);

    let document = ObjDocument {
        positions,
        faces: faces
            .iter()
            .map(|face| {
                let class = CollisionClass {
                    col_type: face.col_type,
                    terrain_type: face.terrain_type,
                    unknown: face.unknown,
                    col_parameter: face.col_parameter,
                };
                ObjFace {
                    indices: face.indices,
                    material: Some(class.material_name()),
                }
            })
            .collect(),
    };

    write_obj(dest, &document)?;
    tracing::info!("Conversion complete");
    Ok(())
}
