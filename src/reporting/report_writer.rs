//! Line output for scan results and failures

use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Prefix of the diagnostic printed when a scan fails
pub const FILESYSTEM_ERROR_PREFIX: &str = "Filesystem error";

/// Write a single matching file name, byte for byte
pub fn write_match<W: Write>(out: &mut W, name: &[u8]) -> Result<()> {
    out.write_all(name)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Write the one-line diagnostic for a failed scan
///
/// # Arguments
/// * `err` - Error stream to write to
/// * `error` - Failure returned by the scan; its whole context chain is printed
pub fn write_filesystem_error<W: Write>(err: &mut W, error: &anyhow::Error) -> Result<()> {
    writeln!(err, "{}: {:#}", FILESYSTEM_ERROR_PREFIX, error)?;
    Ok(())
}

/// Write the verbose end-of-scan summary
pub fn write_summary<W: Write>(err: &mut W, root: &Path, count: usize) -> Result<()> {
    writeln!(err, "Found {} JPG file(s) under {}", count, root.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_write_match() {
        let mut out = Vec::new();
        write_match(&mut out, b"a.jpg").unwrap();
        write_match(&mut out, b"c.JPG").unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "a.jpg\nc.JPG\n");
    }

    #[test]
    fn test_write_match_keeps_raw_bytes() {
        let mut out = Vec::new();
        write_match(&mut out, b"caf\xe9.jpg").unwrap();

        assert_eq!(out, b"caf\xe9.jpg\n");
    }

    #[test]
    fn test_write_filesystem_error_includes_chain() {
        let error = anyhow!("No such file or directory").context("cannot access /missing");

        let mut err = Vec::new();
        write_filesystem_error(&mut err, &error).unwrap();

        let content = String::from_utf8(err).unwrap();
        assert_eq!(
            content,
            "Filesystem error: cannot access /missing: No such file or directory\n"
        );
    }

    #[test]
    fn test_write_summary() {
        let mut err = Vec::new();
        write_summary(&mut err, Path::new("/scenes"), 3).unwrap();

        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Found 3 JPG file(s) under /scenes\n"
        );
    }
}
