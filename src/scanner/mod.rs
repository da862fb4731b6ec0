//! Directory walking and file name matching

pub mod file_name;
pub mod file_scanner;

pub use file_name::{
    extension_of, is_jpg_extension, matching_jpg_name, name_bytes, name_from_bytes,
    strip_colon_suffix,
};
pub use file_scanner::{
    collect_jpg_files, for_each_jpg_file, list_jpg_files, walk_entries, DirectoryEntry,
};
