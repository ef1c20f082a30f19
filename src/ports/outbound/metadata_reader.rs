use crate::bom_generation::domain::PackageRecord;
use crate::shared::Result;
use std::path::Path;

/// MetadataReader port for reading the package metadata document
///
/// This port abstracts the file system operations needed to read and
/// decode the metadata document into validated package records.
pub trait MetadataReader {
    /// Reads the metadata document at the given path and returns its
    /// package records in input order
    ///
    /// # Arguments
    /// * `metadata_path` - Path to the metadata JSON document
    ///
    /// # Returns
    /// The validated package records; an absent `packages` key yields an
    /// empty list
    ///
    /// # Errors
    /// Returns an error if:
    /// - The metadata file does not exist or cannot be read
    /// - The file contents are not valid JSON
    /// - A package record lacks a required field (`name`, `version`)
    fn read_packages(&self, metadata_path: &Path) -> Result<Vec<PackageRecord>>;
}
