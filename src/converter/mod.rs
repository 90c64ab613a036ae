//! Format conversions
//!
//! File-to-file conversions between COL and Wavefront OBJ. These go through
//! the scene layer, so the OBJ side is in host space (z up) and the COL side
//! in game space.

mod col_to_obj;
mod obj_to_col;

pub use col_to_obj::convert_col_to_obj;
pub use obj_to_col::convert_obj_to_col;
