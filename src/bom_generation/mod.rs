/// BOM generation - Core domain logic for SBOM creation
///
/// This module contains the pure business logic of the tool: the package
/// record model, the license resolution policy, and the identity generation
/// service. Nothing here touches the file system.
pub mod domain;
pub mod policies;
pub mod services;
