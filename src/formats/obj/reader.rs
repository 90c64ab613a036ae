//! Wavefront OBJ reading and parsing

use std::fs;
use std::path::Path;

use glam::Vec3;

use super::{ObjDocument, ObjFace};
use crate::error::{Error, Result};

/// Read an .obj file from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened and
/// [`Error::ObjParse`] on a malformed statement.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::ObjParse`]: crate::Error::ObjParse
pub fn read_obj<P: AsRef<Path>>(path: P) -> Result<ObjDocument> {
    let text = fs::read_to_string(path)?;
    parse_obj_str(&text)
}

/// Parse OBJ text.
///
/// Handles `v`, `f`, and `usemtl`; grouping, normal, and texture statements
/// are skipped. Faces with more than three corners are fan-triangulated, and
/// `v/vt/vn` corners keep only the vertex index.
pub fn parse_obj_str(text: &str) -> Result<ObjDocument> {
    let mut document = ObjDocument::default();
    let mut current_material: Option<String> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let position = parse_position(&mut tokens, line_number)?;
                document.positions.push(position);
            }
            Some("usemtl") => {
                current_material = tokens.next().map(str::to_string);
            }
            Some("f") => {
                let corners = tokens
                    .map(|token| parse_corner(token, line_number))
                    .collect::<Result<Vec<usize>>>()?;
                if corners.len() < 3 {
                    return Err(Error::ObjParse {
                        line: line_number,
                        message: format!("face with {} corners", corners.len()),
                    });
                }
                for i in 1..corners.len() - 1 {
                    document.faces.push(ObjFace {
                        indices: [corners[0], corners[i], corners[i + 1]],
                        material: current_material.clone(),
                    });
                }
            }
            // Statements with no collision meaning.
            _ => {}
        }
    }

    for face in &document.faces {
        for &index in &face.indices {
            if index >= document.positions.len() {
                return Err(Error::InvalidFaceIndex {
                    index,
                    vertex_count: document.positions.len(),
                });
            }
        }
    }

    Ok(document)
}

fn parse_position<'a, I>(tokens: &mut I, line: usize) -> Result<Vec3>
where
    I: Iterator<Item = &'a str>,
{
    let mut coordinates = [0.0f32; 3];
    for coordinate in &mut coordinates {
        let token = tokens.next().ok_or_else(|| Error::ObjParse {
            line,
            message: "vertex with fewer than 3 coordinates".to_string(),
        })?;
        *coordinate = token.parse().map_err(|_| Error::ObjParse {
            line,
            message: format!("bad coordinate '{token}'"),
        })?;
    }
    Ok(Vec3::from_array(coordinates))
}

fn parse_corner(token: &str, line: usize) -> Result<usize> {
    let index_token = token.split('/').next().unwrap_or("");
    let index: i64 = index_token.parse().map_err(|_| Error::ObjParse {
        line,
        message: format!("bad face index '{token}'"),
    })?;
    if index < 1 {
        // Zero is illegal in OBJ; negative (relative) indices are not
        // produced by any tool this bridge targets.
        return Err(Error::ObjParse {
            line,
            message: format!("unsupported face index {index}"),
        });
    }
    Ok((index - 1) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = "\
# comment
v 0 0 0
v 1 0 0
v 0 1 0
usemtl 5,2,0
f 1 2 3
";

    #[test]
    fn test_parse_simple() {
        let document = parse_obj_str(SIMPLE).unwrap();
        assert_eq!(document.positions.len(), 3);
        assert_eq!(document.positions[1], Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(document.faces.len(), 1);
        assert_eq!(document.faces[0].indices, [0, 1, 2]);
        assert_eq!(document.faces[0].material.as_deref(), Some("5,2,0"));
    }

    #[test]
    fn test_fan_triangulation() {
        let text = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
        let document = parse_obj_str(text).unwrap();
        assert_eq!(document.faces.len(), 2);
        assert_eq!(document.faces[0].indices, [0, 1, 2]);
        assert_eq!(document.faces[1].indices, [0, 2, 3]);
    }

    #[test]
    fn test_corner_suffixes_ignored() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1/1/1 2/2/2 3/3/3\n";
        let document = parse_obj_str(text).unwrap();
        assert_eq!(document.faces[0].indices, [0, 1, 2]);
    }

    #[test]
    fn test_material_resets_per_statement() {
        let text = "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl 1,0,0\nf 1 2 3\nusemtl 2,0,0\nf 3 2 1\n";
        let document = parse_obj_str(text).unwrap();
        assert_eq!(document.faces[0].material.as_deref(), Some("1,0,0"));
        assert_eq!(document.faces[1].material.as_deref(), Some("2,0,0"));
    }

    #[test]
    fn test_bad_coordinate() {
        let err = parse_obj_str("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, Error::ObjParse { line: 1, .. }));
    }

    #[test]
    fn test_face_index_out_of_range() {
        let err = parse_obj_str("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::InvalidFaceIndex { index: 1, .. }));
    }

    #[test]
    fn test_negative_index_rejected() {
        let err = parse_obj_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nf -1 -2 -3\n").unwrap_err();
        assert!(matches!(err, Error::ObjParse { line: 4, .. }));
    }
}
