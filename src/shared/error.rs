use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for BOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Metadata file not found: {path}\n\n💡 Hint: {suggestion}")]
    MetadataNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse metadata file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file contains valid JSON")]
    MetadataParseError { path: PathBuf, details: String },

    #[error("Package record #{index} is missing required field \"{field}\"\n\n💡 Hint: Every entry in \"packages\" must carry both \"name\" and \"version\"")]
    MissingField { index: usize, field: &'static str },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_metadata_not_found_display() {
        let error = BomError::MetadataNotFound {
            path: PathBuf::from("/test/path/metadata.json"),
            suggestion: "Test suggestion".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Metadata file not found"));
        assert!(display.contains("/test/path/metadata.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Test suggestion"));
    }

    #[test]
    fn test_metadata_parse_error_display() {
        let error = BomError::MetadataParseError {
            path: PathBuf::from("/test/metadata.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse metadata file"));
        assert!(display.contains("/test/metadata.json"));
        assert!(display.contains("expected value at line 1 column 1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_missing_field_display() {
        let error = BomError::MissingField {
            index: 2,
            field: "version",
        };
        let display = format!("{}", error);
        assert!(display.contains("Package record #2"));
        assert!(display.contains("\"version\""));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = BomError::FileReadError {
            path: PathBuf::from("/test/metadata.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/metadata.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = BomError::FileWriteError {
            path: PathBuf::from("/test/BOM.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/BOM.json"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }
}
