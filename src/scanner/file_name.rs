//! File name normalization for JPG matching
//!
//! Names are handled as raw bytes so that non-UTF-8 names are matched and
//! printed exactly as they appear on disk.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};

/// Extension that qualifies a file for listing, compared ASCII case-insensitively
pub const JPG_EXTENSION: &[u8] = b"jpg";

/// Raw bytes of a file name
///
/// On Unix these are the bytes stored in the directory entry. Elsewhere the
/// name goes through a lossy UTF-8 conversion first.
#[cfg(unix)]
pub fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(name.as_bytes())
}

#[cfg(not(unix))]
pub fn name_bytes(name: &OsStr) -> Cow<'_, [u8]> {
    match name.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Inverse of [`name_bytes`]
#[cfg(unix)]
pub fn name_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
pub fn name_from_bytes(bytes: &[u8]) -> OsString {
    String::from_utf8_lossy(bytes).into_owned().into()
}

/// Drop everything from the first `:` onwards.
///
/// Files copied off NTFS often come with sidecars such as
/// `photo.jpg:Zone.Identifier`; this reduces them to `photo.jpg`.
pub fn strip_colon_suffix(name: &[u8]) -> &[u8] {
    match name.iter().position(|&b| b == b':') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// Bytes after the last `.` of `name`, or `None` if there is no `.` at all.
///
/// Unlike [`std::path::Path::extension`], a leading dot counts: `.jpg`
/// has the extension `jpg`.
pub fn extension_of(name: &[u8]) -> Option<&[u8]> {
    name.iter().rposition(|&b| b == b'.').map(|pos| &name[pos + 1..])
}

/// Check whether an extension is `jpg`, ignoring ASCII case
pub fn is_jpg_extension(ext: &[u8]) -> bool {
    ext.eq_ignore_ascii_case(JPG_EXTENSION)
}

/// Normalize a file name and decide whether it should be listed
///
/// # Arguments
/// * `name` - Last path component of a regular file
///
/// # Returns
/// The colon-truncated name to print, or `None` if it is not a JPG
pub fn matching_jpg_name(name: &[u8]) -> Option<&[u8]> {
    let truncated = strip_colon_suffix(name);
    let ext = extension_of(truncated)?;
    is_jpg_extension(ext).then_some(truncated)
}
