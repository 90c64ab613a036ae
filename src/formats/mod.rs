//! File format readers and writers

pub mod col;
pub mod obj;
