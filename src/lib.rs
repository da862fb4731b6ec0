//! JPG Scanner Library
//!
//! Recursively lists JPG files in a directory tree, printing file names only.

pub mod reporting;
pub mod scanner;

pub use reporting::report_writer;
pub use scanner::{file_name, file_scanner};

/// Root scanned when no directory is given on the command line
pub const DEFAULT_ROOT: &str = "/home/sho/experiment/scenes";

/// Re-export commonly used types
pub mod prelude {
    pub use crate::reporting::report_writer::{
        write_filesystem_error, write_match, write_summary, FILESYSTEM_ERROR_PREFIX,
    };
    pub use crate::scanner::file_name::{
        extension_of, is_jpg_extension, matching_jpg_name, name_bytes, name_from_bytes,
        strip_colon_suffix, JPG_EXTENSION,
    };
    pub use crate::scanner::file_scanner::{
        collect_jpg_files, for_each_jpg_file, list_jpg_files, walk_entries, DirectoryEntry,
    };
    pub use crate::DEFAULT_ROOT;
}
