/// PackageRecord value object representing one entry of the metadata document
///
/// The required fields (`name`, `version`) are guaranteed present by
/// construction; the optional fields are normalized so that an empty string
/// is treated the same as an absent value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRecord {
    name: String,
    version: String,
    description: Option<String>,
    license: Option<String>,
    license_file: Option<String>,
}

impl PackageRecord {
    pub fn new(
        name: String,
        version: String,
        description: Option<String>,
        license: Option<String>,
        license_file: Option<String>,
    ) -> Self {
        Self {
            name,
            version,
            description: non_empty(description),
            license: non_empty(license),
            license_file: non_empty(license_file),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    /// The license file is a presence-only flag; its value is never copied
    /// into the generated BOM.
    pub fn license_file(&self) -> Option<&str> {
        self.license_file.as_deref()
    }
}

/// Normalizes an optional field so that an empty string counts as absent
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
