//! Archive writer for newsdesk.
//!
//! Persists caller-supplied text or JSON into a designated archive
//! directory with sanitized file names, overwrite semantics, and a
//! post-write existence check.

pub mod sanitize;
pub mod writer;

pub use sanitize::sanitize_file_name;
pub use writer::{ArchiveWriter, json_file_stem};
