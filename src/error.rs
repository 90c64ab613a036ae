//! Error types for `suncol`

use thiserror::Error;

/// The error type for `suncol` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file or stream operations.
    #[error("IO error: {0}")]
    Io(#[source] std::io::Error),

    /// Unexpected end of input while unpacking.
    #[error("unexpected end of file")]
    UnexpectedEof,

    // ==================== Wire Format Errors ====================
    /// A fixed-size byte string or array was packed with a wrong-length value.
    #[error("wrong length: expected {expected}, got {actual}")]
    LengthMismatch {
        /// The declared length.
        expected: usize,
        /// The length of the supplied value.
        actual: usize,
    },

    /// A fixed-point value does not fit its backing integer after scaling.
    #[error("fixed-point value {value} out of range")]
    FixedPointRange {
        /// The value that was being packed.
        value: f64,
    },

    /// A string is too long for its length prefix.
    #[error("string length {length} exceeds the length prefix range")]
    StringTooLong {
        /// The byte length of the string.
        length: usize,
    },

    /// Invalid UTF-8 in a decoded string.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    // ==================== COL Errors ====================
    /// The vertex list cannot be addressed by COL's 16-bit triangle indices.
    #[error("too many vertices for COL indices: {count}")]
    TooManyVertices {
        /// The number of vertices in the flattened list.
        count: usize,
    },

    /// A collision group holds more triangles than its 16-bit count field.
    #[error("collision group {collision_type} has too many triangles: {count}")]
    GroupTooLarge {
        /// The group's collision type key.
        collision_type: u16,
        /// The number of triangles in the group.
        count: usize,
    },

    /// A block starts past the range of the 32-bit offset table.
    #[error("block offset {offset} exceeds u32 range")]
    OffsetOverflow {
        /// The actual stream position.
        offset: u64,
    },

    /// A face references a vertex that does not exist.
    #[error("face references vertex {index}, but only {vertex_count} vertices exist")]
    InvalidFaceIndex {
        /// The out-of-range vertex index.
        index: usize,
        /// The number of vertices available.
        vertex_count: usize,
    },

    // ==================== OBJ Errors ====================
    /// Malformed Wavefront OBJ statement.
    #[error("OBJ parse error at line {line}: {message}")]
    ObjParse {
        /// 1-based line number of the offending statement.
        line: usize,
        /// Description of what is malformed.
        message: String,
    },
}

// A short read anywhere in an unpack path means a truncated or corrupt file,
// so fold it into one variant instead of leaking the io::ErrorKind.
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(err)
        }
    }
}

/// A specialized Result type for `suncol` operations.
pub type Result<T> = std::result::Result<T, Error>;
