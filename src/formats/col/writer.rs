//! COL file writing
//!
//! The group table sits between the header and the data blocks but holds
//! absolute offsets into those blocks, so writing is two-pass: reserve the
//! table, stream out every block while capturing the offsets, then seek back
//! and write the table for real.

use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use super::grouping::group_triangles;
use super::{ColGroup, ColHeader, ColModel, GROUP_SIZE, HEADER_SIZE};
use crate::error::{Error, Result};
use crate::wire::big_endian::{UINT8, UINT16};
use crate::wire::{Descriptor, Record};

/// Write a .col file to disk.
///
/// # Errors
/// Returns an error if the model exceeds the format's count fields or file
/// writing fails. A failed write may leave a partial file behind.
pub fn write_col<P: AsRef<Path>>(path: P, model: &ColModel) -> Result<()> {
    tracing::info!("Writing COL file: {:?}", path.as_ref());

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_col_to(&mut writer, model)?;
    writer.flush()?;
    Ok(())
}

/// Write a collision model to a seekable stream.
///
/// The stream is caller-owned and is not closed. On success the file image
/// is, in order: header, group table, vertex block, all vertex-index blocks,
/// all terrain blocks, all unknown blocks, then the parameter blocks of the
/// groups that have one.
pub fn write_col_to<W: Write + Seek>(stream: &mut W, model: &ColModel) -> Result<()> {
    let groups = group_triangles(&model.triangles);
    tracing::debug!(
        "Packing {} triangles into {} groups",
        model.triangles.len(),
        groups.len()
    );

    let vertex_count = u32::try_from(model.vertices.len()).map_err(|_| Error::TooManyVertices {
        count: model.vertices.len(),
    })?;
    let table_size = GROUP_SIZE * groups.len();
    let vertex_offset =
        u32::try_from(HEADER_SIZE + table_size).map_err(|_| Error::OffsetOverflow {
            offset: (HEADER_SIZE + table_size) as u64,
        })?;

    let header = ColHeader {
        vertex_count,
        vertex_offset,
        group_count: groups.len() as u32,
        group_offset: HEADER_SIZE as u32,
    };
    header.pack(stream)?;

    // Reserve the group table; its offsets are backpatched at the end.
    stream.write_all(&vec![0u8; table_size])?;

    for vertex in &model.vertices {
        vertex.pack(stream)?;
    }

    let mut records = Vec::with_capacity(groups.len());
    for group in &groups {
        let triangle_count =
            u16::try_from(group.triangles.len()).map_err(|_| Error::GroupTooLarge {
                collision_type: group.collision_type,
                count: group.triangles.len(),
            })?;
        records.push(ColGroup {
            collision_type: group.collision_type,
            triangle_count,
            has_col_parameter: group.has_col_parameter,
            vertex_index_offset: 0,
            terrain_type_offset: 0,
            unknown_offset: 0,
            col_parameter_offset: 0,
        });
    }

    for (record, group) in records.iter_mut().zip(&groups) {
        record.vertex_index_offset = current_offset(stream)?;
        for triangle in &group.triangles {
            UINT16.pack(stream, &triangle.vertex_indices[0])?;
            UINT16.pack(stream, &triangle.vertex_indices[1])?;
            UINT16.pack(stream, &triangle.vertex_indices[2])?;
        }
    }

    for (record, group) in records.iter_mut().zip(&groups) {
        record.terrain_type_offset = current_offset(stream)?;
        for triangle in &group.triangles {
            UINT8.pack(stream, &triangle.terrain_type)?;
        }
    }

    for (record, group) in records.iter_mut().zip(&groups) {
        record.unknown_offset = current_offset(stream)?;
        for triangle in &group.triangles {
            UINT8.pack(stream, &triangle.unknown)?;
        }
    }

    for (record, group) in records.iter_mut().zip(&groups) {
        if !record.has_col_parameter {
            // Sentinel: offset 0 can never address a real block.
            record.col_parameter_offset = 0;
            continue;
        }
        record.col_parameter_offset = current_offset(stream)?;
        for triangle in &group.triangles {
            UINT16.pack(stream, &triangle.col_parameter.unwrap_or(0))?;
        }
    }

    // Backpatch the group table.
    stream.seek(SeekFrom::Start(u64::from(header.group_offset)))?;
    for record in &records {
        record.pack(stream)?;
    }

    Ok(())
}

fn current_offset<S: Seek>(stream: &mut S) -> Result<u32> {
    let position = stream.stream_position()?;
    u32::try_from(position).map_err(|_| Error::OffsetOverflow { offset: position })
}
