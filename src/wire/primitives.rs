//! Fixed-width numeric descriptors
//!
//! Each numeric descriptor is a zero-sized marker generic over the byte order.
//! The COL codec only ever uses the big-endian instances from
//! [`big_endian`](super::big_endian), but the order is a type parameter the
//! same way it is a constructor argument in other format toolkits.

use std::io::{Read, Write};
use std::marker::PhantomData;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt, WriteBytesExt};

use super::Descriptor;
use crate::error::Result;

macro_rules! ordered_numeric {
    ($(#[$doc:meta] $name:ident, $value:ty, $bytes:expr, $read:ident, $write:ident;)*) => {
        $(
            #[$doc]
            #[derive(Clone, Copy, Debug, Default)]
            pub struct $name<O: ByteOrder = BigEndian>(PhantomData<O>);

            impl<O: ByteOrder> $name<O> {
                pub const fn new() -> Self {
                    Self(PhantomData)
                }
            }

            impl<O: ByteOrder> Descriptor for $name<O> {
                type Value = $value;

                fn size(&self) -> Option<usize> {
                    Some($bytes)
                }

                fn pack<W: Write>(&self, writer: &mut W, value: &$value) -> Result<()> {
                    writer.$write::<O>(*value)?;
                    Ok(())
                }

                fn unpack<R: Read>(&self, reader: &mut R) -> Result<$value> {
                    Ok(reader.$read::<O>()?)
                }
            }
        )*
    };
}

ordered_numeric! {
    /// Unsigned 16-bit integer.
    Uint16, u16, 2, read_u16, write_u16;
    /// Unsigned 32-bit integer.
    Uint32, u32, 4, read_u32, write_u32;
    /// Signed 16-bit integer.
    Int16, i16, 2, read_i16, write_i16;
    /// Signed 32-bit integer.
    Int32, i32, 4, read_i32, write_i32;
    /// IEEE 754 single-precision float.
    Float32, f32, 4, read_f32, write_f32;
    /// IEEE 754 double-precision float.
    Float64, f64, 8, read_f64, write_f64;
}

/// Unsigned 8-bit integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Uint8;

impl Descriptor for Uint8 {
    type Value = u8;

    fn size(&self) -> Option<usize> {
        Some(1)
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &u8) -> Result<()> {
        writer.write_u8(*value)?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<u8> {
        Ok(reader.read_u8()?)
    }
}

/// Signed 8-bit integer.
#[derive(Clone, Copy, Debug, Default)]
pub struct Int8;

impl Descriptor for Int8 {
    type Value = i8;

    fn size(&self) -> Option<usize> {
        Some(1)
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &i8) -> Result<()> {
        writer.write_i8(*value)?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<i8> {
        Ok(reader.read_i8()?)
    }
}

/// One-byte boolean: `true` packs as 1, any nonzero byte unpacks as `true`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bool8;

impl Descriptor for Bool8 {
    type Value = bool;

    fn size(&self) -> Option<usize> {
        Some(1)
    }

    fn pack<W: Write>(&self, writer: &mut W, value: &bool) -> Result<()> {
        writer.write_u8(u8::from(*value))?;
        Ok(())
    }

    fn unpack<R: Read>(&self, reader: &mut R) -> Result<bool> {
        Ok(reader.read_u8()? != 0)
    }
}

#[cfg(test)]
mod tests {
    use byteorder::LittleEndian;

    use super::*;

    #[test]
    fn test_big_endian_byte_order() {
        let mut buf = Vec::new();
        Uint16::<BigEndian>::new().pack(&mut buf, &0x1234).unwrap();
        assert_eq!(buf, [0x12, 0x34]);

        let mut buf = Vec::new();
        Uint32::<BigEndian>::new().pack(&mut buf, &0xDEADBEEF).unwrap();
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn test_byte_order_is_a_parameter() {
        let mut buf = Vec::new();
        Uint16::<LittleEndian>::new().pack(&mut buf, &0x1234).unwrap();
        assert_eq!(buf, [0x34, 0x12]);
    }

    #[test]
    fn test_float32_round_trip() {
        let mut buf = Vec::new();
        let descriptor = Float32::<BigEndian>::new();
        descriptor.pack(&mut buf, &-12.625).unwrap();
        assert_eq!(buf.len(), 4);
        assert_eq!(descriptor.unpack(&mut buf.as_slice()).unwrap(), -12.625);
    }

    #[test]
    fn test_bool8() {
        let mut buf = Vec::new();
        Bool8.pack(&mut buf, &true).unwrap();
        Bool8.pack(&mut buf, &false).unwrap();
        assert_eq!(buf, [1, 0]);

        // Any nonzero byte decodes as true.
        assert!(Bool8.unpack(&mut &[0xFF_u8][..]).unwrap());
        assert!(!Bool8.unpack(&mut &[0x00_u8][..]).unwrap());
    }

    #[test]
    fn test_truncated_read() {
        let err = Uint32::<BigEndian>::new()
            .unpack(&mut &[0x01_u8, 0x02][..])
            .unwrap_err();
        assert!(matches!(err, crate::Error::UnexpectedEof));
    }
}
