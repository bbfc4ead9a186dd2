/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `circuits` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. The edge list could not be read, or it
///   names a vertex outside the declared range. Nothing is enumerated.
/// - Exit code **1**: usage error, or an enumeration that could not finish
///   (internal invariant violation, worker thread failure).
use std::fmt;
use std::path::PathBuf;

use circuits_core::{GraphBuildError, InvariantViolation, ParallelError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `circuits` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// The input file could not be found.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read the input file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error, including failures writing to stdout.
    IoError {
        /// The file, `stdin` or `stdout`.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// An arc names a vertex outside `0..num_vertices`.
    ArcOutOfRange {
        /// Source vertex of the arc.
        source: usize,
        /// Target vertex of the arc.
        target: usize,
        /// The declared vertex count.
        vertex_count: usize,
    },

    // --- Exit code 1: usage and enumeration failures ---
    /// The command line could not be parsed. `detail` is clap's rendered
    /// message, usage included.
    Usage {
        /// The rendered message.
        detail: String,
    },

    /// The enumeration stopped on an internal error.
    Enumeration {
        /// Description of the failure.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (file not found, bad UTF-8, arc out of range, etc.).
    /// - `1`: usage error or failed enumeration.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ArcOutOfRange { .. } => 2,

            Self::Usage { .. } | Self::Enumeration { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ArcOutOfRange {
                source,
                target,
                vertex_count,
            } => {
                format!(
                    "error: arc {source} -> {target} uses a vertex outside 0..{vertex_count}"
                )
            }
            Self::Usage { detail } => detail.trim_end().to_owned(),
            Self::Enumeration { detail } => {
                format!("error: enumeration failed: {detail}")
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<GraphBuildError> for CliError {
    fn from(e: GraphBuildError) -> Self {
        match e {
            GraphBuildError::VertexOutOfRange {
                source,
                target,
                vertex_count,
            } => Self::ArcOutOfRange {
                source,
                target,
                vertex_count,
            },
        }
    }
}

impl From<InvariantViolation> for CliError {
    fn from(e: InvariantViolation) -> Self {
        Self::Enumeration {
            detail: e.to_string(),
        }
    }
}

impl From<ParallelError> for CliError {
    fn from(e: ParallelError) -> Self {
        Self::Enumeration {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn read_failures_are_exit_2() {
        let errors = [
            CliError::FileNotFound {
                path: PathBuf::from("graph.txt"),
            },
            CliError::PermissionDenied {
                path: PathBuf::from("/root/graph.txt"),
            },
            CliError::FileTooLarge {
                source: "big.txt".to_owned(),
                limit: 1024,
                actual: Some(2048),
            },
            CliError::InvalidUtf8 {
                source: "-".to_owned(),
                byte_offset: 3,
            },
            CliError::StdinReadError {
                detail: "broken pipe".to_owned(),
            },
            CliError::IoError {
                source: "stdout".to_owned(),
                detail: "broken pipe".to_owned(),
            },
        ];
        for e in &errors {
            assert_eq!(e.exit_code(), 2, "{e:?}");
        }
    }

    #[test]
    fn arc_out_of_range_is_exit_2() {
        let e = CliError::from(GraphBuildError::VertexOutOfRange {
            source: 2,
            target: 16,
            vertex_count: 16,
        });
        assert_eq!(e.exit_code(), 2);
        let msg = e.message();
        assert!(msg.contains("2 -> 16"), "message: {msg}");
        assert!(msg.contains("0..16"), "message: {msg}");
    }

    #[test]
    fn usage_is_exit_1() {
        let e = CliError::Usage {
            detail: "error: missing NUM_VERTICES\n".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
        assert_eq!(e.message(), "error: missing NUM_VERTICES");
    }

    #[test]
    fn enumeration_failures_are_exit_1() {
        let invariant = CliError::from(InvariantViolation::PathOverflow { limit: 4 });
        assert_eq!(invariant.exit_code(), 1);
        assert!(invariant.message().contains("enumeration failed"));

        let worker = CliError::from(ParallelError::WorkerPanicked { worker: 2 });
        assert_eq!(worker.exit_code(), 1);
        assert!(worker.message().contains("worker 2"));
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("figure10.txt"),
        };
        let msg = e.message();
        assert!(msg.contains("figure10.txt"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_without_actual_mentions_limit() {
        let e = CliError::FileTooLarge {
            source: "-".to_owned(),
            limit: 512,
            actual: None,
        };
        assert!(e.message().contains("512"));
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::StdinReadError {
            detail: "interrupted".to_owned(),
        };
        assert_eq!(format!("{e}"), e.message());
    }
}
