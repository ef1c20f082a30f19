/// Domain layer - Core business entities and value objects
pub mod bom_identity;
pub mod metadata_document;
pub mod package;

pub use bom_identity::BomIdentity;
pub use metadata_document::MetadataDocument;
pub use package::PackageRecord;
