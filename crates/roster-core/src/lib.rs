//! Core data types and presentation for the student roster
//!
//! This crate holds the storage-independent pieces: the `Student`
//! record as read back from the `students` table, the insert payload,
//! and the console formatting used by the demo.

pub mod display;
pub mod student;

pub use display::*;
pub use student::*;
