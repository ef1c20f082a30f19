use crate::bom_generation::domain::PackageRecord;

/// Fallback descriptor used when a package only points at a license file
pub const SEE_LICENSE_FILE: &str = "See license file";

/// Resolved license descriptor for one component
///
/// CycloneDX distinguishes between a recognized license identifier (`id`)
/// and a free-form license name (`name`); the two variants map onto those
/// fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLicense {
    /// The package declared a license identifier
    Id(String),
    /// The package only shipped a license file; the descriptor carries the
    /// fixed name "See license file"
    SeeLicenseFile,
}

/// LicenseResolution policy for mapping package metadata to a descriptor
///
/// Priority order:
/// 1. `license` field (license identifier)
/// 2. `license_file` field (presence only)
/// 3. neither - the component carries no license descriptor at all
pub struct LicenseResolution;

impl LicenseResolution {
    /// Resolves the license descriptor for a package record
    ///
    /// # Returns
    /// The resolved descriptor, or None if the record declares no license
    /// information in either field
    pub fn resolve(record: &PackageRecord) -> Option<ResolvedLicense> {
        if let Some(license) = record.license() {
            return Some(ResolvedLicense::Id(license.to_string()));
        }

        record
            .license_file()
            .map(|_| ResolvedLicense::SeeLicenseFile)
    }
}
