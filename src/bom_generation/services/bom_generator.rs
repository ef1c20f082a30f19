use crate::bom_generation::domain::BomIdentity;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// Vendor stamped into the tools entry of every generated BOM
const TOOL_VENDOR: &str = "Onyx";

/// Root application component the generated BOM describes
const ROOT_COMPONENT_NAME: &str = "yt-frontend";
const ROOT_COMPONENT_VERSION: &str = "0.1.0";

/// BomGenerator service for generating BOM identity metadata
///
/// This service contains pure business logic for BOM envelope generation.
/// It creates the per-invocation metadata conforming to the CycloneDX
/// specification: a fresh serial number and a UTC timestamp with a literal
/// `Z` suffix.
pub struct BomGenerator;

impl BomGenerator {
    /// Generates BOM identity with current timestamp and unique serial number
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool generating the BOM
    /// * `tool_version` - Version of the tool
    ///
    /// # Returns
    /// BomIdentity with generated timestamp and UUID serial number
    pub fn generate_identity(tool_name: &str, tool_version: &str) -> BomIdentity {
        // CycloneDX expects the Z suffix rather than a +00:00 offset
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let serial_number = format!("urn:uuid:{}", Uuid::new_v4());

        BomIdentity::new(
            timestamp,
            serial_number,
            TOOL_VENDOR.to_string(),
            tool_name.to_string(),
            tool_version.to_string(),
            ROOT_COMPONENT_NAME.to_string(),
            ROOT_COMPONENT_VERSION.to_string(),
        )
    }

    /// Generates BOM identity with default tool information (onyx-sbom)
    ///
    /// This uses the compile-time name and version from Cargo.toml
    pub fn generate_default_identity() -> BomIdentity {
        Self::generate_identity(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }
}
