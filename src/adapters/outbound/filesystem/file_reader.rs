use crate::bom_generation::domain::{MetadataDocument, PackageRecord};
use crate::ports::outbound::MetadataReader;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements the MetadataReader port, providing file system
/// access for reading the package metadata document.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path).map_err(|e| BomError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        // Security check: Reject symbolic links
        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        // Security check: Ensure it's a regular file
        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        // Security check: File size limit (prevent DoS via huge files)
        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        // Safe to read the file now
        fs::read_to_string(path).map_err(|e| {
            BomError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl MetadataReader for FileSystemReader {
    fn read_packages(&self, metadata_path: &Path) -> Result<Vec<PackageRecord>> {
        // Check if the metadata file exists
        if !metadata_path.exists() {
            return Err(BomError::MetadataNotFound {
                path: metadata_path.to_path_buf(),
                suggestion: format!(
                    "The metadata document \"{}\" does not exist.\n   \
                     Please run in the directory containing it, or specify the correct path with the --metadata option.",
                    metadata_path.display()
                ),
            }
            .into());
        }

        // Read metadata content with security checks
        let content = self.safe_read_file(metadata_path)?;

        // Decode and validate the package records
        let document =
            MetadataDocument::parse(&content).map_err(|e| BomError::MetadataParseError {
                path: metadata_path.to_path_buf(),
                details: e.to_string(),
            })?;

        document.into_records()
    }
}
