use crate::bom_generation::domain::{BomIdentity, PackageRecord};
use crate::shared::Result;

/// BomFormatter port for serializing the BOM document
///
/// This port abstracts the output representation so the application core
/// stays independent of the concrete document format.
pub trait BomFormatter {
    /// Formats the BOM envelope and component list as a document string
    ///
    /// # Arguments
    /// * `identity` - Per-invocation envelope metadata
    /// * `records` - Package records, in the order they should appear
    ///
    /// # Returns
    /// The complete serialized document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, identity: &BomIdentity, records: &[PackageRecord]) -> Result<String>;
}
