use crate::shared::error::DepthError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file we read (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text input file after checking that it is safe to load
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - Human-readable description for error messages (e.g. "package index")
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_FILE_SIZE`]
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| DepthError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(DepthError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(DepthError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is not a regular file", description),
            hint: "Pass the path of a file, not a directory or device".to_string(),
        }
        .into());
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(DepthError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "The {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                description,
                metadata.len(),
                MAX_FILE_SIZE
            ),
            hint: "Split the file or check that the right path was given".to_string(),
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| {
        DepthError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("index.toml");
        fs::write(&file_path, "content").unwrap();

        let content = read_regular_file(&file_path, "package index").unwrap();
        assert_eq!(content, "content");
    }

    #[test]
    fn test_read_regular_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/index.toml");
        let result = read_regular_file(&path, "package index");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read file"));
    }

    #[test]
    fn test_read_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_regular_file(temp_dir.path(), "package index").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepthError>(),
            Some(DepthError::SecurityError { .. })
        ));
        let message = err.to_string();
        assert!(message.contains("not a regular file"));
        assert!(message.contains("💡 Hint:"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_regular_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.toml");
        let link = temp_dir.path().join("link.toml");
        fs::write(&target, "content").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_regular_file(&link, "package index");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Security violation"));
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_max_file_size_constant() {
        assert_eq!(MAX_FILE_SIZE, 100 * 1024 * 1024);
    }
}
