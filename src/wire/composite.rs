//! Composite and variable-length descriptors

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

use super::Descriptor;
use crate::error::{Error, Result};

/// A scaled-integer representation of a rational number.
///
/// Packs `round(value / scale)` into the backing integer descriptor and
/// recovers `raw * scale` on read. Rounding is round-half-away-from-zero;
/// values whose scaled form does not fit the backing integer fail with
/// [`Error::FixedPointRange`].
#[derive(Clone, Copy, Debug)]
pub struct FixedPoint<D> {
    raw: D,
    scale: f64,
}

impl<D> FixedPoint<D> {
    pub const fn new(raw: D, scale: f64) -> Self {
        Self { raw, scale }
    }
}

impl<D> Descriptor for FixedPoint<D>
where
    D: Descriptor,
    D::Value: Copy + Into<i64> + TryFrom<i64>,
{
    type Value = f64;

    fn size(&self) -> Option<usize> {
        self.raw.size()
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &f64) -> Result<()> {
        if !value.is_finite() {
            return Err(Error::FixedPointRange { value: *value });
        }
        let scaled = (value / self.scale).round();
        let raw = D::Value::try_from(scaled as i64)
            .map_err(|_| Error::FixedPointRange { value: *value })?;
        self.raw.pack(writer, &raw)
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<f64> {
        let raw: i64 = self.raw.unpack(reader)?.into();
        Ok(raw as f64 * self.scale)
    }
}

/// Exactly `len` raw bytes.
///
/// Packing a value of any other length is a caller contract violation and
/// fails with [`Error::LengthMismatch`] before anything is written.
#[derive(Clone, Copy, Debug)]
pub struct ByteString {
    len: usize,
}

impl ByteString {
    pub const fn new(len: usize) -> Self {
        Self { len }
    }
}

impl Descriptor for ByteString {
    type Value = Vec<u8>;

    fn size(&self) -> Option<usize> {
        Some(self.len)
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &Vec<u8>) -> Result<()> {
        if value.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: value.len(),
            });
        }
        writer.write_all(value)?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; self.len];
        reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

/// Exactly `len` elements of an inner descriptor, packed back to back.
#[derive(Clone, Copy, Debug)]
pub struct FixedArray<D> {
    element: D,
    len: usize,
}

impl<D> FixedArray<D> {
    pub const fn new(element: D, len: usize) -> Self {
        Self { element, len }
    }
}

impl<D: Descriptor> Descriptor for FixedArray<D> {
    type Value = Vec<D::Value>;

    fn size(&self) -> Option<usize> {
        self.element.size().map(|size| size * self.len)
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &Vec<D::Value>) -> Result<()> {
        if value.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: value.len(),
            });
        }
        for element in value {
            self.element.pack(writer, element)?;
        }
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<Vec<D::Value>> {
        let mut values = Vec::with_capacity(self.len);
        for _ in 0..self.len {
            values.push(self.element.unpack(reader)?);
        }
        Ok(values)
    }
}

/// NUL-terminated UTF-8 string. No static size.
#[derive(Clone, Copy, Debug, Default)]
pub struct CString;

impl Descriptor for CString {
    type Value = String;

    fn size(&self) -> Option<usize> {
        None
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &String) -> Result<()> {
        writer.write_all(value.as_bytes())?;
        writer.write_u8(0)?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<String> {
        let mut bytes = Vec::new();
        loop {
            let byte = reader.read_u8()?;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
        }
        Ok(String::from_utf8(bytes)?)
    }
}

/// Length-prefixed UTF-8 string: a length descriptor followed by that many
/// bytes. No static size.
#[derive(Clone, Copy, Debug)]
pub struct PString<L> {
    length: L,
}

impl<L> PString<L> {
    pub const fn new(length: L) -> Self {
        Self { length }
    }
}

impl<L> Descriptor for PString<L>
where
    L: Descriptor,
    L::Value: Copy + Into<u64> + TryFrom<usize>,
{
    type Value = String;

    fn size(&self) -> Option<usize> {
        None
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &String) -> Result<()> {
        let length = L::Value::try_from(value.len()).map_err(|_| Error::StringTooLong {
            length: value.len(),
        })?;
        self.length.pack(writer, &length)?;
        writer.write_all(value.as_bytes())?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<String> {
        let length: u64 = self.length.unpack(reader)?.into();
        let mut bytes = Vec::new();
        reader.take(length).read_to_end(&mut bytes)?;
        if bytes.len() as u64 != length {
            return Err(Error::UnexpectedEof);
        }
        Ok(String::from_utf8(bytes)?)
    }
}

/// Filler bytes carrying no data.
///
/// Packing always writes `len` copies of the fill byte, whatever the record
/// holds; unpacking discards `len` bytes without decoding them. The fill
/// defaults to `0xFF`.
#[derive(Clone, Copy, Debug)]
pub struct Padding {
    len: usize,
    fill: u8,
}

impl Padding {
    pub const fn new(len: usize) -> Self {
        Self { len, fill: 0xFF }
    }

    pub const fn with_fill(len: usize, fill: u8) -> Self {
        Self { len, fill }
    }

    /// Write the fill bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for _ in 0..self.len {
            writer.write_u8(self.fill)?;
        }
        Ok(())
    }

    /// Discard the padding bytes from `reader`.
    pub fn skip<R: Read>(&self, reader: &mut R) -> Result<()> {
        let mut buf = vec![0u8; self.len];
        reader.read_exact(&mut buf)?;
        Ok(())
    }
}

impl Descriptor for Padding {
    type Value = ();

    fn size(&self) -> Option<usize> {
        Some(self.len)
    }

    fn pack<W: Write>(&self, writer: &mut W, _value: &()) -> Result<()> {
        self.write_to(writer)
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<()> {
        self.skip(reader)
    }
}
