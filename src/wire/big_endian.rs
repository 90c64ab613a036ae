//! Big-endian descriptor instances
//!
//! The single byte order used by every record in the COL format.

use super::primitives::{Bool8, Float32, Float64, Int8, Int16, Int32, Uint8, Uint16, Uint32};

pub const UINT8: Uint8 = Uint8;
pub const UINT16: Uint16 = Uint16::new();
pub const UINT32: Uint32 = Uint32::new();
pub const INT8: Int8 = Int8;
pub const INT16: Int16 = Int16::new();
pub const INT32: Int32 = Int32::new();
pub const FLOAT32: Float32 = Float32::new();
pub const FLOAT64: Float64 = Float64::new();
pub const BOOL8: Bool8 = Bool8;
