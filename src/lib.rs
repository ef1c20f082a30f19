//! onyx-sbom - CycloneDX SBOM generator for package metadata documents
//!
//! This library converts a package-metadata JSON document into a CycloneDX
//! 1.4 Software Bill of Materials, following hexagonal architecture
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and boundary DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use onyx_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let metadata_reader = FileSystemReader::new();
//!
//! // Create and execute the use case
//! let use_case = GenerateBomUseCase::new(metadata_reader);
//! let response = use_case.execute(BomRequest::new(PathBuf::from("metadata.json")))?;
//!
//! // Format and write the output
//! let formatter = CycloneDxFormatter::new();
//! let output = formatter.format(&response.identity, &response.records)?;
//! FileSystemWriter::new(PathBuf::from("BOM.json")).present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_generation;
pub mod cli;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::CycloneDxFormatter;
    pub use crate::application::dto::{BomRequest, BomResponse};
    pub use crate::application::use_cases::GenerateBomUseCase;
    pub use crate::bom_generation::domain::{BomIdentity, MetadataDocument, PackageRecord};
    pub use crate::bom_generation::policies::{LicenseResolution, ResolvedLicense};
    pub use crate::bom_generation::services::BomGenerator;
    pub use crate::ports::outbound::{BomFormatter, MetadataReader, OutputPresenter};
    pub use crate::shared::Result;
}
