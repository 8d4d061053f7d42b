use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between a package that failed
/// to resolve and a broken invocation or environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested package was resolved and printed
    Success = 0,
    /// A requested package could not be resolved; remaining packages were skipped
    ResolutionFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, package index, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ResolutionFailure => write!(f, "Resolution Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency tree analysis.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum DepthError {
    /// The resolver could not build a tree for a requested package.
    /// Already reported on stdout as a FATAL line by the time it is returned.
    #[error("'{package}': FATAL: {details}")]
    ResolutionFailure { package: String, details: String },

    #[error("Package index not found: {path}\n\n💡 Hint: {suggestion}")]
    IndexNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse package index: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the index is valid TOML with [[package]] entries")]
    IndexParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DepthError {
    /// Returns true for failures that were already reported to the user
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, DepthError::ResolutionFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ResolutionFailure.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ResolutionFailure),
            "Resolution Failure (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_resolution_failure_display_matches_fatal_line() {
        let error = DepthError::ResolutionFailure {
            package: "app".to_string(),
            details: "unable to resolve root package".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "'app': FATAL: unable to resolve root package"
        );
        assert!(error.is_resolution_failure());
    }

    #[test]
    fn test_index_not_found_display() {
        let error = DepthError::IndexNotFound {
            path: PathBuf::from("/test/depth.toml"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Package index not found"));
        assert!(display.contains("/test/depth.toml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
        assert!(!error.is_resolution_failure());
    }

    #[test]
    fn test_index_parse_error_display() {
        let error = DepthError::IndexParseError {
            path: PathBuf::from("/test/depth.toml"),
            details: "Invalid TOML syntax".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package index"));
        assert!(display.contains("Invalid TOML syntax"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = DepthError::FileReadError {
            path: PathBuf::from("/test/file.txt"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/file.txt"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_security_error_display() {
        let error = DepthError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Symbolic links are not allowed"));
        assert!(display.contains("Use a regular file instead"));
    }
}
