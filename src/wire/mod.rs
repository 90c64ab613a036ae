//! Binary type descriptors and record layouts
//!
//! The COL format is a fixed-layout big-endian binary format. This module
//! provides the building blocks the codec is declared with: descriptors for
//! primitive wire types (integers, floats, fixed-point numbers, strings,
//! padding) and a record layout system that binds an ordered list of named
//! fields to a struct and packs/unpacks it in one pass.
//!
//! Every descriptor knows how to write a value, read a value back, and report
//! its encoded size. Descriptors with no static size (terminated and
//! length-prefixed strings) report `None` and force the records containing
//! them to be laid out by tracking the stream position.

mod composite;
mod primitives;
mod record;

pub mod big_endian;

pub use composite::{ByteString, CString, FixedArray, FixedPoint, PString, Padding};
pub use primitives::{Bool8, Float32, Float64, Int8, Int16, Int32, Uint8, Uint16, Uint32};
pub use record::{Layout, LayoutBuilder, Record};

use std::io::{Read, Write};

use crate::error::Result;

/// A binary codec for one wire type.
///
/// `pack` writes exactly `size()` bytes (or a value-dependent number of bytes
/// when the size is unknown), and `unpack` consumes exactly as many.
pub trait Descriptor {
    /// The in-memory type this descriptor encodes.
    type Value;

    /// Encoded size in bytes, or `None` if it depends on the value.
    fn size(&self) -> Option<usize>;

    /// Write `value` to `writer` in this descriptor's encoding.
    fn pack<W: Write>(&self, writer: &mut W, value: &Self::Value) -> Result<()>;

    /// Read one value from `reader`.
    ///
    /// # Errors
    /// Returns [`Error::UnexpectedEof`] if the reader ends mid-value.
    ///
    /// [`Error::UnexpectedEof`]: crate::Error::UnexpectedEof
    fn unpack<R: Read>(&self, reader: &mut R) -> Result<Self::Value>;
}
