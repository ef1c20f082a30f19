use crate::bom_generation::domain::{BomIdentity, PackageRecord};
use crate::bom_generation::policies::{LicenseResolution, ResolvedLicense, SEE_LICENSE_FILE};
use crate::ports::outbound::BomFormatter;
use crate::shared::Result;
use serde::Serialize;

/// CycloneDX specification version of the generated document
const SPEC_VERSION: &str = "1.4";

#[derive(Debug, Serialize)]
struct Bom {
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    #[serde(rename = "serialNumber")]
    serial_number: String,
    version: u32,
    metadata: Metadata,
    components: Vec<Component>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
    component: RootComponent,
}

#[derive(Debug, Serialize)]
struct Tool {
    vendor: String,
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct RootComponent {
    name: String,
    version: String,
    #[serde(rename = "type")]
    component_type: String,
}

#[derive(Debug, Serialize)]
struct Component {
    #[serde(rename = "type")]
    component_type: String,
    name: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    licenses: Option<Vec<License>>,
}

#[derive(Debug, Serialize)]
struct License {
    license: LicenseContent,
}

#[derive(Debug, Serialize)]
struct LicenseContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

/// CycloneDxFormatter adapter for generating CycloneDX 1.4 JSON format
///
/// This adapter implements the BomFormatter port for CycloneDX format.
/// Output is serialized with 2-space indentation.
pub struct CycloneDxFormatter;

impl CycloneDxFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CycloneDxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BomFormatter for CycloneDxFormatter {
    fn format(&self, identity: &BomIdentity, records: &[PackageRecord]) -> Result<String> {
        let bom = Bom {
            bom_format: "CycloneDX".to_string(),
            spec_version: SPEC_VERSION.to_string(),
            serial_number: identity.serial_number().to_string(),
            version: 1,
            metadata: self.build_metadata(identity),
            components: self.build_components(records),
        };

        serde_json::to_string_pretty(&bom).map_err(Into::into)
    }
}

impl CycloneDxFormatter {
    /// Build the metadata block from the BOM identity
    fn build_metadata(&self, identity: &BomIdentity) -> Metadata {
        Metadata {
            timestamp: identity.timestamp().to_string(),
            tools: vec![Tool {
                vendor: identity.tool_vendor().to_string(),
                name: identity.tool_name().to_string(),
                version: identity.tool_version().to_string(),
            }],
            component: RootComponent {
                name: identity.root_component_name().to_string(),
                version: identity.root_component_version().to_string(),
                component_type: "application".to_string(),
            },
        }
    }

    /// Build components from the package records, preserving input order
    fn build_components(&self, records: &[PackageRecord]) -> Vec<Component> {
        records
            .iter()
            .map(|record| Component {
                component_type: "library".to_string(),
                name: record.name().to_string(),
                version: record.version().to_string(),
                description: record.description().map(String::from),
                licenses: LicenseResolution::resolve(record).map(|r| self.build_licenses(r)),
            })
            .collect()
    }

    /// Build the single-element license sequence from a resolved descriptor
    fn build_licenses(&self, resolved: ResolvedLicense) -> Vec<License> {
        let content = match resolved {
            ResolvedLicense::Id(id) => LicenseContent {
                id: Some(id),
                name: None,
            },
            ResolvedLicense::SeeLicenseFile => LicenseContent {
                id: None,
                name: Some(SEE_LICENSE_FILE.to_string()),
            },
        };

        vec![License { license: content }]
    }
}
