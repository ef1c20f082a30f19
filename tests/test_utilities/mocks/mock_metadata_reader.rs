use onyx_sbom::prelude::*;
use std::path::Path;

/// Mock MetadataReader for testing
///
/// Holds the metadata document content in memory and runs it through the
/// same decode and validation path as the filesystem adapter.
pub struct MockMetadataReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockMetadataReader {
    pub fn new(content: String) -> Self {
        Self {
            content,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl MetadataReader for MockMetadataReader {
    fn read_packages(&self, _metadata_path: &Path) -> Result<Vec<PackageRecord>> {
        if self.should_fail {
            anyhow::bail!("Mock metadata read failure");
        }
        MetadataDocument::parse(&self.content)?.into_records()
    }
}
