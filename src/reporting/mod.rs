//! Output formatting

pub mod report_writer;

pub use report_writer::{write_filesystem_error, write_match, write_summary};
