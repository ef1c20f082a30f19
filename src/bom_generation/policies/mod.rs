/// Policies - Business rules that operate on domain objects
pub mod license_resolution;

pub use license_resolution::{LicenseResolution, ResolvedLicense, SEE_LICENSE_FILE};
