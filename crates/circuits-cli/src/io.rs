/// Input reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for input I/O in the `circuits`
/// binary; `circuits-core` never touches the filesystem.
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: read through a `Read::take` cap so allocation is bounded.
/// - UTF-8 validation reports the byte offset of the first bad sequence.
/// - All I/O errors become [`CliError`] variants with exit code 2.
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, input
/// larger than `max_size`, any other I/O error, or invalid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => {
            let stdin = std::io::stdin();
            read_capped(stdin.lock(), max_size)
        }
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();
    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps a disk-file `std::io::Error` to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stream reading
// ---------------------------------------------------------------------------

/// Reads `reader` to the end, failing once more than `max_size` bytes arrive.
///
/// Reads at most `max_size + 1` bytes, so a stream exactly at the limit is
/// accepted and the allocation stays bounded.
fn read_capped<R: Read>(reader: R, max_size: u64) -> Result<String, CliError> {
    let mut buf: Vec<u8> = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 > max_size {
        return Err(CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: max_size,
            actual: None,
        });
    }
    log::debug!("read {} bytes from stdin", buf.len());
    bytes_to_string(buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::{Cursor, Write as _};
    use std::path::PathBuf;

    use super::*;

    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    // ── disk files ───────────────────────────────────────────────────────────

    #[test]
    fn read_edge_list_file() {
        let f = temp_file_with(b"0 1\n1 0\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 1024).expect("reads"), "0 1\n1 0\n");
    }

    #[test]
    fn read_file_exactly_at_limit_succeeds() {
        let f = temp_file_with(b"0 1\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        assert_eq!(read_input(&source, 4).expect("at limit"), "0 1\n");
    }

    #[test]
    fn read_file_over_limit_reports_actual_size() {
        let f = temp_file_with(b"0 1\n1 2\n2 0\n");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 4).expect_err("over limit") {
            CliError::FileTooLarge {
                actual: Some(n), ..
            } => assert_eq!(n, 12),
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn read_invalid_utf8_reports_offset() {
        let f = temp_file_with(b"0 1 \xFF");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        match read_input(&source, 1024).expect_err("bad UTF-8") {
            CliError::InvalidUtf8 { byte_offset, .. } => assert_eq!(byte_offset, 4),
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn read_nonexistent_file_returns_file_not_found() {
        let source = PathOrStdin::Path(PathBuf::from("/no/such/file/graph.txt"));
        let err = read_input(&source, 1024).expect_err("missing file");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    // ── streams ──────────────────────────────────────────────────────────────

    #[test]
    fn stream_at_limit_is_accepted() {
        let text = read_capped(Cursor::new(b"3 3".to_vec()), 3).expect("at limit");
        assert_eq!(text, "3 3");
    }

    #[test]
    fn stream_over_limit_is_rejected() {
        match read_capped(Cursor::new(b"3 3 ".to_vec()), 3).expect_err("over limit") {
            CliError::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                assert_eq!(source, "-");
                assert_eq!(limit, 3);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn stream_invalid_utf8_is_rejected() {
        let err = read_capped(Cursor::new(vec![0xFF]), 16).expect_err("bad UTF-8");
        assert!(matches!(err, CliError::InvalidUtf8 { byte_offset: 0, .. }));
    }
}
