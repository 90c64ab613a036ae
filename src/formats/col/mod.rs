//! COL collision mesh file format
//!
//! Binary format for Super Mario Sunshine collision geometry. A COL file is a
//! 16-byte header, a group table, a vertex block, and four per-group
//! attribute blocks (vertex-index triples, terrain bytes, unknown bytes, and
//! an optional parameter block), all addressed by absolute byte offsets
//! backpatched into the group table.

mod grouping;
mod reader;
mod writer;

pub use grouping::{group_triangles, TriangleGroup};
pub use reader::{parse_col_bytes, read_col, read_col_from};
pub use writer::{write_col, write_col_to};

use std::io::{Read, Write};
use std::sync::OnceLock;

use crate::error::Result;
use crate::wire::big_endian::{BOOL8, FLOAT32, UINT16, UINT32};
use crate::wire::{Descriptor, Layout, Padding, Record};

/// Header size in bytes (4 × u32).
pub const HEADER_SIZE: usize = 16;

/// Group table entry size in bytes (2 × u16 + 4 flag/padding bytes + 4 × u32).
pub const GROUP_SIZE: usize = 24;

/// Vertex size in bytes (3 × f32).
pub const VERTEX_SIZE: usize = 12;

/// Group flag byte, always written as zero. The game only honors bit 0 of
/// the following byte (the parameter flag).
const GROUP_FLAGS_PAD: Padding = Padding::with_fill(1, 0x00);

/// Reserved bytes after the parameter flag.
const GROUP_RESERVED_PAD: Padding = Padding::new(2);

/// COL file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColHeader {
    pub vertex_count: u32,
    /// Absolute byte offset of the vertex block.
    pub vertex_offset: u32,
    pub group_count: u32,
    /// Absolute byte offset of the group table; always [`HEADER_SIZE`].
    pub group_offset: u32,
}

impl Record for ColHeader {
    fn layout() -> &'static Layout {
        static LAYOUT: OnceLock<Layout> = OnceLock::new();
        LAYOUT.get_or_init(|| {
            Layout::builder()
                .field("vertex_count", &UINT32)
                .field("vertex_offset", &UINT32)
                .field("group_count", &UINT32)
                .field("group_offset", &UINT32)
                .build()
        })
    }

    fn pack<W: Write>(&self, writer: &mut W) -> Result<()> {
        UINT32.pack(writer, &self.vertex_count)?;
        UINT32.pack(writer, &self.vertex_offset)?;
        UINT32.pack(writer, &self.group_count)?;
        UINT32.pack(writer, &self.group_offset)?;
        Ok(())
    }

    fn unpack<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            vertex_count: UINT32.unpack(reader)?,
            vertex_offset: UINT32.unpack(reader)?,
            group_count: UINT32.unpack(reader)?,
            group_offset: UINT32.unpack(reader)?,
        })
    }
}

/// One group table entry: a run of triangles sharing a collision type, with
/// the absolute offsets of its four attribute blocks.
///
/// `col_parameter_offset == 0` means the group has no parameter block; a real
/// block can never start at offset 0 because the header occupies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColGroup {
    /// Collision behavior key (water, lava, slippery, ...).
    pub collision_type: u16,
    pub triangle_count: u16,
    pub has_col_parameter: bool,
    pub vertex_index_offset: u32,
    pub terrain_type_offset: u32,
    pub unknown_offset: u32,
    pub col_parameter_offset: u32,
}

impl Record for ColGroup {
    fn layout() -> &'static Layout {
        static LAYOUT: OnceLock<Layout> = OnceLock::new();
        LAYOUT.get_or_init(|| {
            Layout::builder()
                .field("collision_type", &UINT16)
                .field("triangle_count", &UINT16)
                .padding(&GROUP_FLAGS_PAD)
                .field("has_col_parameter", &BOOL8)
                .padding(&GROUP_RESERVED_PAD)
                .field("vertex_index_offset", &UINT32)
                .field("terrain_type_offset", &UINT32)
                .field("unknown_offset", &UINT32)
                .field("col_parameter_offset", &UINT32)
                .build()
        })
    }

    fn pack<W: Write>(&self, writer: &mut W) -> Result<()> {
        UINT16.pack(writer, &self.collision_type)?;
        UINT16.pack(writer, &self.triangle_count)?;
        GROUP_FLAGS_PAD.write_to(writer)?;
        BOOL8.pack(writer, &self.has_col_parameter)?;
        GROUP_RESERVED_PAD.write_to(writer)?;
        UINT32.pack(writer, &self.vertex_index_offset)?;
        UINT32.pack(writer, &self.terrain_type_offset)?;
        UINT32.pack(writer, &self.unknown_offset)?;
        UINT32.pack(writer, &self.col_parameter_offset)?;
        Ok(())
    }

    fn unpack<R: Read>(reader: &mut R) -> Result<Self> {
        let collision_type = UINT16.unpack(reader)?;
        let triangle_count = UINT16.unpack(reader)?;
        GROUP_FLAGS_PAD.skip(reader)?;
        let has_col_parameter = BOOL8.unpack(reader)?;
        GROUP_RESERVED_PAD.skip(reader)?;
        Ok(Self {
            collision_type,
            triangle_count,
            has_col_parameter,
            vertex_index_offset: UINT32.unpack(reader)?,
            terrain_type_offset: UINT32.unpack(reader)?,
            unknown_offset: UINT32.unpack(reader)?,
            col_parameter_offset: UINT32.unpack(reader)?,
        })
    }
}

/// One point in COL space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Record for Vertex {
    fn layout() -> &'static Layout {
        static LAYOUT: OnceLock<Layout> = OnceLock::new();
        LAYOUT.get_or_init(|| {
            Layout::builder()
                .field("x", &FLOAT32)
                .field("y", &FLOAT32)
                .field("z", &FLOAT32)
                .build()
        })
    }

    fn pack<W: Write>(&self, writer: &mut W) -> Result<()> {
        FLOAT32.pack(writer, &self.x)?;
        FLOAT32.pack(writer, &self.y)?;
        FLOAT32.pack(writer, &self.z)?;
        Ok(())
    }

    fn unpack<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            x: FLOAT32.unpack(reader)?,
            y: FLOAT32.unpack(reader)?,
            z: FLOAT32.unpack(reader)?,
        })
    }
}

/// One collision triangle.
///
/// The indices are lookups into the owning model's vertex list; a triangle
/// never owns vertices. The parameter is optional on the wire: groups whose
/// triangles carry none have no parameter block at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub vertex_indices: [u16; 3],
    pub col_type: u16,
    pub terrain_type: u8,
    pub unknown: u8,
    pub col_parameter: Option<u16>,
}

impl Triangle {
    pub fn has_col_parameter(&self) -> bool {
        self.col_parameter.is_some()
    }
}

/// A complete collision mesh: the flat lists exchanged with the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColModel {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sizes_match_wire_constants() {
        assert_eq!(ColHeader::size(), Some(HEADER_SIZE));
        assert_eq!(ColGroup::size(), Some(GROUP_SIZE));
        assert_eq!(Vertex::size(), Some(VERTEX_SIZE));
    }

    #[test]
    fn test_group_wire_image() {
        let group = ColGroup {
            collision_type: 0x0105,
            triangle_count: 2,
            has_col_parameter: true,
            vertex_index_offset: 0x28,
            terrain_type_offset: 0x34,
            unknown_offset: 0x36,
            col_parameter_offset: 0x38,
        };
        let mut buf = Vec::new();
        group.pack(&mut buf).unwrap();
        assert_eq!(
            buf,
            [
                0x01, 0x05, // collision type
                0x00, 0x02, // triangle count
                0x00, // flag byte
                0x01, // has parameter
                0xFF, 0xFF, // reserved
                0x00, 0x00, 0x00, 0x28, // vertex index offset
                0x00, 0x00, 0x00, 0x34, // terrain type offset
                0x00, 0x00, 0x00, 0x36, // unknown offset
                0x00, 0x00, 0x00, 0x38, // parameter offset
            ]
        );
        assert_eq!(ColGroup::unpack(&mut buf.as_slice()).unwrap(), group);
    }

    #[test]
    fn test_group_reserved_bytes_ignored() {
        let mut buf = Vec::new();
        ColGroup {
            collision_type: 1,
            triangle_count: 1,
            has_col_parameter: false,
            vertex_index_offset: 0,
            terrain_type_offset: 0,
            unknown_offset: 0,
            col_parameter_offset: 0,
        }
        .pack(&mut buf)
        .unwrap();

        let mut altered = buf.clone();
        altered[6] = 0x00;
        altered[7] = 0x00;
        assert_eq!(
            ColGroup::unpack(&mut buf.as_slice()).unwrap(),
            ColGroup::unpack(&mut altered.as_slice()).unwrap()
        );
    }

    #[test]
    fn test_header_round_trip() {
        let header = ColHeader {
            vertex_count: 3,
            vertex_offset: 40,
            group_count: 1,
            group_offset: 16,
        };
        let mut buf = Vec::new();
        header.pack(&mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE);
        assert_eq!(ColHeader::unpack(&mut buf.as_slice()).unwrap(), header);
    }

    #[test]
    fn test_vertex_round_trip() {
        let vertex = Vertex {
            x: 1.0,
            y: -2.5,
            z: 1000.25,
        };
        let mut buf = Vec::new();
        vertex.pack(&mut buf).unwrap();
        assert_eq!(buf.len(), VERTEX_SIZE);
        assert_eq!(Vertex::unpack(&mut buf.as_slice()).unwrap(), vertex);
    }
}
