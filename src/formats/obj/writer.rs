//! Wavefront OBJ writing

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ObjDocument;
use crate::error::Result;

/// Write an .obj file to disk.
///
/// # Errors
/// Returns an error if file writing fails.
pub fn write_obj<P: AsRef<Path>>(path: P, document: &ObjDocument) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj_to(&mut writer, document)?;
    writer.flush()?;
    Ok(())
}

/// Write an OBJ document to a stream.
///
/// Emits one `v` statement per position, a `usemtl` whenever the active
/// material changes, and 1-based `f` statements.
pub fn write_obj_to<W: Write>(writer: &mut W, document: &ObjDocument) -> Result<()> {
    for position in &document.positions {
        writeln!(writer, "v {} {} {}", position.x, position.y, position.z)?;
    }

    let mut current_material: Option<&str> = None;
    for face in &document.faces {
        let material = face.material.as_deref();
        if material != current_material {
            if let Some(name) = material {
                writeln!(writer, "usemtl {name}")?;
            }
            current_material = material;
        }
        writeln!(
            writer,
            "f {} {} {}",
            face.indices[0] + 1,
            face.indices[1] + 1,
            face.indices[2] + 1
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::super::{parse_obj_str, ObjFace};
    use super::*;

    #[test]
    fn test_write_and_parse_back() {
        let document = ObjDocument {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::Z],
            faces: vec![
                ObjFace {
                    indices: [0, 1, 2],
                    material: Some("5,2,0".to_string()),
                },
                ObjFace {
                    indices: [0, 2, 3],
                    material: Some("5,2,0".to_string()),
                },
                ObjFace {
                    indices: [3, 2, 1],
                    material: Some("6,0,0,8000".to_string()),
                },
            ],
        };

        let mut buf = Vec::new();
        write_obj_to(&mut buf, &document).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // One usemtl per material run, not per face.
        assert_eq!(text.matches("usemtl").count(), 2);
        assert_eq!(parse_obj_str(&text).unwrap(), document);
    }

    #[test]
    fn test_faces_without_material() {
        let document = ObjDocument {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            faces: vec![ObjFace {
                indices: [0, 1, 2],
                material: None,
            }],
        };

        let mut buf = Vec::new();
        write_obj_to(&mut buf, &document).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("usemtl"));
        assert_eq!(parse_obj_str(&text).unwrap(), document);
    }
}
