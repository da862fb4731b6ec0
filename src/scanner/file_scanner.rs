//! Recursive JPG file scanning

use anyhow::{bail, Context, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::file_name::{matching_jpg_name, name_bytes, name_from_bytes};
use crate::reporting::report_writer::write_match;

/// A single entry produced by the directory walk
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub is_regular_file: bool,
}

impl DirectoryEntry {
    fn from_walk(entry: &walkdir::DirEntry) -> Result<Self> {
        let file_type = entry.file_type();
        let is_regular_file = if file_type.is_symlink() {
            symlink_targets_file(entry.path())?
        } else {
            file_type.is_file()
        };

        Ok(Self {
            path: entry.path().to_path_buf(),
            is_regular_file,
        })
    }

    /// Last path component
    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }
}

/// Classify a symlink by its target.
///
/// A target that does not exist is simply not a regular file; any other
/// failure (a link loop, a permission error) fails the scan.
fn symlink_targets_file(path: &Path) -> Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => {
            Err(e).with_context(|| format!("cannot resolve symlink {}", path.display()))
        }
    }
}

/// Walk every entry below `root`, stopping at the first traversal error
///
/// The root itself is not yielded and directory symlinks are not followed.
/// Entries of each directory are visited in file name order. Nothing is
/// snapshotted: changes made to the tree during the walk may or may not be
/// observed, and a directory removed before it is entered fails the walk.
pub fn walk_entries(root: &Path) -> Result<impl Iterator<Item = Result<DirectoryEntry>>> {
    let meta = fs::metadata(root)
        .with_context(|| format!("cannot access {}", root.display()))?;
    if !meta.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    Ok(WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| -> Result<DirectoryEntry> {
            let entry = entry?;
            DirectoryEntry::from_walk(&entry)
        }))
}

/// Visit the name of every JPG file under `root`
///
/// # Arguments
/// * `root` - Directory to scan recursively
/// * `visit` - Called with the colon-truncated name bytes of each match
///
/// # Returns
/// Number of matches visited before the walk finished
pub fn for_each_jpg_file<F>(root: &Path, mut visit: F) -> Result<usize>
where
    F: FnMut(&[u8]) -> Result<()>,
{
    let mut matched = 0;

    for entry in walk_entries(root)? {
        let entry = entry?;
        if !entry.is_regular_file {
            continue;
        }
        let Some(name) = entry.file_name() else {
            continue;
        };
        let bytes = name_bytes(name);
        if let Some(shown) = matching_jpg_name(&bytes) {
            visit(shown)?;
            matched += 1;
        }
    }

    Ok(matched)
}

/// Stream matching JPG file names to `out`, one per line
///
/// Lines already written stay written if the walk fails part way.
pub fn list_jpg_files<W: Write>(root: &Path, out: &mut W) -> Result<usize> {
    for_each_jpg_file(root, |name| write_match(out, name))
}

/// Collect matching JPG file names from a directory tree
///
/// # Arguments
/// * `root` - Directory to scan recursively
///
/// # Returns
/// Colon-truncated file names in traversal order
pub fn collect_jpg_files(root: &Path) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for_each_jpg_file(root, |name| {
        names.push(name_from_bytes(name));
        Ok(())
    })?;
    Ok(names)
}
