/// BomIdentity value object holding the per-invocation envelope metadata
///
/// Everything here is stamped into the `metadata` block of the generated
/// document: the generation timestamp, the unique serial number, the
/// identity of this tool, and the root application component the BOM
/// describes.
#[derive(Debug, Clone)]
pub struct BomIdentity {
    timestamp: String,
    serial_number: String,
    tool_vendor: String,
    tool_name: String,
    tool_version: String,
    root_component_name: String,
    root_component_version: String,
}

impl BomIdentity {
    pub fn new(
        timestamp: String,
        serial_number: String,
        tool_vendor: String,
        tool_name: String,
        tool_version: String,
        root_component_name: String,
        root_component_version: String,
    ) -> Self {
        Self {
            timestamp,
            serial_number,
            tool_vendor,
            tool_name,
            tool_version,
            root_component_name,
            root_component_version,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    pub fn tool_vendor(&self) -> &str {
        &self.tool_vendor
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn root_component_name(&self) -> &str {
        &self.root_component_name
    }

    pub fn root_component_version(&self) -> &str {
        &self.root_component_version
    }
}
