//! # suncol
//!
//! A pure-Rust library for the COL collision mesh format used by Super Mario
//! Sunshine.
//!
//! A COL file stores a collision mesh as a flat vertex list plus triangles
//! partitioned into groups by collision type, with the group table holding
//! backpatched absolute offsets into four per-group attribute blocks. The
//! [`wire`] module provides the big-endian type descriptors and record
//! layouts the format is declared with; [`formats::col`] is the codec built
//! on top of them.
//!
//! ## Reading and writing COL files
//!
//! ```no_run
//! use suncol::formats::col::{read_col, write_col};
//!
//! let model = read_col("dolpic.col")?;
//! println!(
//!     "{} vertices, {} triangles",
//!     model.vertices.len(),
//!     model.triangles.len()
//! );
//! write_col("copy.col", &model)?;
//! # Ok::<(), suncol::Error>(())
//! ```
//!
//! ## Converting to and from Wavefront OBJ
//!
//! ```no_run
//! use suncol::converter::{convert_col_to_obj, convert_obj_to_col};
//!
//! convert_col_to_obj("dolpic.col", "dolpic.obj")?;
//! convert_obj_to_col("edited.obj", "edited.col", 1.0)?;
//! # Ok::<(), suncol::Error>(())
//! ```
//!
//! ## Talking to a host application
//!
//! Editors integrate through the [`scene`] module: implement
//! [`scene::MeshSource`] to export collision geometry and
//! [`scene::MeshSink`] to receive imported geometry; the axis permutation
//! between the host's z-up space and COL's y-up space happens there.
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `suncol` command-line binary

pub mod converter;
pub mod error;
pub mod formats;
pub mod scene;
pub mod wire;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{convert_col_to_obj, convert_obj_to_col};
    pub use crate::error::{Error, Result};
    pub use crate::formats::col::{
        group_triangles, parse_col_bytes, read_col, write_col, ColGroup, ColHeader, ColModel,
        Triangle, TriangleGroup, Vertex,
    };
    pub use crate::formats::obj::{read_obj, write_obj, CollisionClass, ObjDocument, ObjFace};
    pub use crate::scene::{
        export_scene, flatten_scene, import_model, model_to_scene, MeshSink, MeshSource,
        SceneFace, SceneMesh,
    };
    pub use crate::wire::{Descriptor, Record};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
