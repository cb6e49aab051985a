//! Error types and handling for clientctl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Error taxonomy, in increasing diagnostic verbosity:
//! - [`InstallerError::UnsupportedSchema`]: the manifest is a recognized
//!   format but a schema generation this installer does not support
//! - everything else: unexpected failures (I/O, parse, corrupt manifest
//!   data) reported with full diagnostic detail
//!
//! An install action reporting failure through its boolean outcome is not an
//! error at all; it is handled by the install command directly.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for clientctl operations
#[derive(Error, Diagnostic, Debug)]
pub enum InstallerError {
    // Manifest errors
    #[error("Bad launcher profile: {spec}")]
    #[diagnostic(
        code(clientctl::manifest::unsupported_schema),
        help("This installer understands spec 0 legacy profiles and v1 profiles only")
    )]
    UnsupportedSchema { spec: u64 },

    #[error("Install profile not found: {path}")]
    #[diagnostic(
        code(clientctl::manifest::not_found),
        help("Run from the directory containing install_profile.json or pass --manifest")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse install profile: {path}")]
    #[diagnostic(code(clientctl::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Invalid install profile: {message}")]
    #[diagnostic(code(clientctl::manifest::invalid))]
    InvalidManifest { message: String },

    // Progress reporter errors
    #[error("Progress reporter requires at least one output sink")]
    #[diagnostic(code(clientctl::progress::no_outputs))]
    EmptyProgressOutputs,

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(clientctl::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(clientctl::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for InstallerError {
    fn from(err: std::io::Error) -> Self {
        InstallerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, InstallerError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_unsupported_schema_display() {
        let err = InstallerError::UnsupportedSchema { spec: 5 };
        assert_eq!(err.to_string(), "Bad launcher profile: 5");
    }

    #[test]
    fn test_unsupported_schema_code() {
        let err = InstallerError::UnsupportedSchema { spec: 5 };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("clientctl::manifest::unsupported_schema".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InstallerError = io_err.into();
        assert!(matches!(err, InstallerError::IoError { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_result: std::result::Result<serde_json::Value, _> =
            serde_json::from_str("not json");
        let json_err = parse_result.unwrap_err();
        let err: InstallerError = json_err.into();
        assert!(matches!(err, InstallerError::ManifestParseFailed { .. }));
    }

    test_error_contains!(
        test_manifest_not_found_error,
        InstallerError::ManifestNotFound {
            path: "/tmp/install_profile.json".to_string(),
        },
        "Install profile not found",
        "/tmp/install_profile.json",
    );

    test_error_contains!(
        test_invalid_manifest_error,
        InstallerError::InvalidManifest {
            message: "empty path coordinate".to_string(),
        },
        "Invalid install profile",
        "empty path coordinate",
    );

    test_error_contains!(
        test_empty_progress_outputs_error,
        InstallerError::EmptyProgressOutputs,
        "at least one output sink",
    );
}
