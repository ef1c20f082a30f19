use std::path::PathBuf;

/// BomRequest DTO carrying the inputs of a generation run
#[derive(Debug, Clone)]
pub struct BomRequest {
    /// Path to the package metadata document
    pub metadata_path: PathBuf,
}

impl BomRequest {
    pub fn new(metadata_path: PathBuf) -> Self {
        Self { metadata_path }
    }
}
