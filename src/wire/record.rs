//! Record layouts
//!
//! A record is a flat, ordered, named byte layout: every record kind declares
//! its fields once (descriptor order defines the exact byte layout, padding
//! included) and packs/unpacks instances as a single ordered pass. The
//! [`Layout`] carries the declaration; the [`Record`] impl carries the typed
//! pass over a plain struct.

use std::io::{Read, Write};

use super::composite::Padding;
use super::Descriptor;
use crate::error::Result;

enum LayoutEntry {
    Field {
        name: &'static str,
        size: Option<usize>,
    },
    Padding {
        size: usize,
    },
}

impl LayoutEntry {
    fn size(&self) -> Option<usize> {
        match self {
            LayoutEntry::Field { size, .. } => *size,
            LayoutEntry::Padding { size } => Some(*size),
        }
    }
}

/// The ordered field list of one record kind.
///
/// Built once per kind and shared by every instance; order is significant and
/// defines the byte layout.
pub struct Layout {
    entries: Vec<LayoutEntry>,
}

impl Layout {
    pub fn builder() -> LayoutBuilder {
        LayoutBuilder {
            entries: Vec::new(),
        }
    }

    /// Total encoded size: the sum of all member sizes, or `None` as soon as
    /// any member's size is unknown.
    pub fn size(&self) -> Option<usize> {
        self.entries
            .iter()
            .try_fold(0usize, |total, entry| Some(total + entry.size()?))
    }

    /// Names of the named fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter_map(|entry| match entry {
            LayoutEntry::Field { name, .. } => Some(*name),
            LayoutEntry::Padding { .. } => None,
        })
    }
}

/// Builder declaring a [`Layout`] as an ordered sequence of fields and
/// padding entries.
pub struct LayoutBuilder {
    entries: Vec<LayoutEntry>,
}

impl LayoutBuilder {
    /// Append a named field encoded by `descriptor`.
    pub fn field<D: Descriptor>(mut self, name: &'static str, descriptor: &D) -> Self {
        self.entries.push(LayoutEntry::Field {
            name,
            size: descriptor.size(),
        });
        self
    }

    /// Append anonymous padding.
    pub fn padding(mut self, padding: &Padding) -> Self {
        self.entries.push(LayoutEntry::Padding {
            size: padding.size().unwrap_or(0),
        });
        self
    }

    pub fn build(self) -> Layout {
        Layout {
            entries: self.entries,
        }
    }
}

/// A struct with a declared wire layout.
///
/// `pack` writes the fields in declared order, each reading its value from
/// the corresponding struct field; `unpack` allocates a fresh instance and
/// fills the fields in the same order. Padding bytes are written with their
/// fixed fill and discarded on read, so equality of two instances never
/// depends on padding content.
pub trait Record: Sized {
    /// The layout shared by every instance of this record kind.
    fn layout() -> &'static Layout;

    /// Write all fields, in declared order.
    fn pack<W: Write>(&self, writer: &mut W) -> Result<()>;

    /// Read a new instance, fields in declared order.
    fn unpack<R: Read>(reader: &mut R) -> Result<Self>;

    /// Static record size, or `None` if any field is variable-length.
    fn size() -> Option<usize> {
        Self::layout().size()
    }
}
