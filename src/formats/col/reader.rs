//! COL file reading and parsing
//!
//! Reads follow the group table's offsets rather than file order: one seek
//! per group per attribute block. Blocks are usually contiguous in files the
//! writer produces, but nothing here assumes it — each offset only has to be
//! independently valid.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use super::{ColGroup, ColHeader, ColModel, Triangle, Vertex};
use crate::error::Result;
use crate::wire::big_endian::{UINT8, UINT16};
use crate::wire::{Descriptor, Record};

/// Read a .col file from disk.
///
/// # Errors
///
/// Returns [`Error::UnexpectedEof`] if the file is truncated relative to its
/// own header and group table, and [`Error::Io`] for other IO failures.
///
/// [`Error::UnexpectedEof`]: crate::Error::UnexpectedEof
/// [`Error::Io`]: crate::Error::Io
pub fn read_col<P: AsRef<Path>>(path: P) -> Result<ColModel> {
    tracing::info!("Reading COL file: {:?}", path.as_ref());

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_col_from(&mut reader)
}

/// Parse COL data from a byte slice.
pub fn parse_col_bytes(data: &[u8]) -> Result<ColModel> {
    let mut cursor = Cursor::new(data);
    read_col_from(&mut cursor)
}

/// Read a collision model from a seekable stream.
///
/// The stream is caller-owned and is not closed. Offsets in the group table
/// are trusted: an offset pointing outside the file surfaces as
/// [`Error::UnexpectedEof`], an offset pointing at the wrong place decodes to
/// wrong data.
///
/// [`Error::UnexpectedEof`]: crate::Error::UnexpectedEof
pub fn read_col_from<R: Read + Seek>(stream: &mut R) -> Result<ColModel> {
    let header = ColHeader::unpack(stream)?;
    tracing::debug!(
        "COL header: {} vertices, {} groups",
        header.vertex_count,
        header.group_count
    );

    stream.seek(SeekFrom::Start(u64::from(header.group_offset)))?;
    let mut records = Vec::with_capacity(header.group_count as usize);
    for _ in 0..header.group_count {
        records.push(ColGroup::unpack(stream)?);
    }

    stream.seek(SeekFrom::Start(u64::from(header.vertex_offset)))?;
    let mut vertices = Vec::with_capacity(header.vertex_count as usize);
    for _ in 0..header.vertex_count {
        vertices.push(Vertex::unpack(stream)?);
    }

    // Each group's triangles start as placeholders carrying the group's
    // collision type; the attribute passes below fill in the rest.
    let mut group_triangles: Vec<Vec<Triangle>> = records
        .iter()
        .map(|record| {
            vec![
                Triangle {
                    vertex_indices: [0; 3],
                    col_type: record.collision_type,
                    terrain_type: 0,
                    unknown: 0,
                    col_parameter: None,
                };
                usize::from(record.triangle_count)
            ]
        })
        .collect();

    for (record, triangles) in records.iter().zip(group_triangles.iter_mut()) {
        stream.seek(SeekFrom::Start(u64::from(record.vertex_index_offset)))?;
        for triangle in triangles.iter_mut() {
            triangle.vertex_indices = [
                UINT16.unpack(stream)?,
                UINT16.unpack(stream)?,
                UINT16.unpack(stream)?,
            ];
        }
    }

    for (record, triangles) in records.iter().zip(group_triangles.iter_mut()) {
        stream.seek(SeekFrom::Start(u64::from(record.terrain_type_offset)))?;
        for triangle in triangles.iter_mut() {
            triangle.terrain_type = UINT8.unpack(stream)?;
        }
    }

    for (record, triangles) in records.iter().zip(group_triangles.iter_mut()) {
        stream.seek(SeekFrom::Start(u64::from(record.unknown_offset)))?;
        for triangle in triangles.iter_mut() {
            triangle.unknown = UINT8.unpack(stream)?;
        }
    }

    for (record, triangles) in records.iter().zip(group_triangles.iter_mut()) {
        if !record.has_col_parameter {
            continue;
        }
        stream.seek(SeekFrom::Start(u64::from(record.col_parameter_offset)))?;
        for triangle in triangles.iter_mut() {
            triangle.col_parameter = Some(UINT16.unpack(stream)?);
        }
    }

    let triangles = group_triangles.into_iter().flatten().collect();
    Ok(ColModel {
        vertices,
        triangles,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::super::write_col_to;
    use super::*;
    use crate::error::Error;

    fn model(triangles: Vec<Triangle>) -> ColModel {
        let max_index = triangles
            .iter()
            .flat_map(|t| t.vertex_indices)
            .max()
            .unwrap_or(0);
        let vertices = (0..=max_index)
            .map(|i| Vertex {
                x: f32::from(i),
                y: 0.0,
                z: -f32::from(i),
            })
            .collect();
        ColModel {
            vertices,
            triangles,
        }
    }

    fn triangle(col_type: u16, col_parameter: Option<u16>) -> Triangle {
        Triangle {
            vertex_indices: [0, 1, 2],
            col_type,
            terrain_type: 7,
            unknown: 3,
            col_parameter,
        }
    }

    fn round_trip(model: &ColModel) -> ColModel {
        let mut stream = Cursor::new(Vec::new());
        write_col_to(&mut stream, model).unwrap();
        parse_col_bytes(&stream.into_inner()).unwrap()
    }

    #[test]
    fn test_round_trip_preserves_grouped_input() {
        // Already grouped input comes back exactly as written.
        let model = model(vec![
            triangle(5, None),
            triangle(5, None),
            triangle(9, Some(8000)),
        ]);
        assert_eq!(round_trip(&model), model);
    }

    #[test]
    fn test_round_trip_reorders_by_group() {
        let interleaved = model(vec![
            triangle(2, None),
            triangle(1, None),
            triangle(2, None),
        ]);
        let decoded = round_trip(&interleaved);

        assert_eq!(decoded.vertices, interleaved.vertices);
        let types: Vec<u16> = decoded.triangles.iter().map(|t| t.col_type).collect();
        assert_eq!(types, [2, 2, 1]);
    }

    #[test]
    fn test_round_trip_parameter_value() {
        let decoded = round_trip(&model(vec![triangle(5, Some(300))]));
        assert_eq!(decoded.triangles[0].col_parameter, Some(300));
    }

    #[test]
    fn test_groups_without_parameter_stay_parameterless() {
        let decoded = round_trip(&model(vec![triangle(5, None), triangle(6, Some(1))]));
        assert_eq!(decoded.triangles[0].col_parameter, None);
        assert_eq!(decoded.triangles[1].col_parameter, Some(1));
    }

    #[test]
    fn test_truncated_header() {
        let err = parse_col_bytes(&[0, 0, 0]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }

    #[test]
    fn test_truncated_block() {
        let mut stream = Cursor::new(Vec::new());
        write_col_to(&mut stream, &model(vec![triangle(5, None)])).unwrap();
        let bytes = stream.into_inner();

        // Cut the file inside the index block.
        let err = parse_col_bytes(&bytes[..bytes.len() - 4]).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof));
    }
}
