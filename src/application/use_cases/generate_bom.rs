use crate::application::dto::{BomRequest, BomResponse};
use crate::bom_generation::services::BomGenerator;
use crate::ports::outbound::MetadataReader;
use crate::shared::Result;

/// GenerateBomUseCase - Core use case for BOM generation
///
/// This use case orchestrates the generation workflow using generic
/// dependency injection for the infrastructure dependency.
///
/// # Type Parameters
/// * `MR` - MetadataReader implementation
pub struct GenerateBomUseCase<MR> {
    metadata_reader: MR,
}

impl<MR> GenerateBomUseCase<MR>
where
    MR: MetadataReader,
{
    /// Creates a new GenerateBomUseCase with the injected reader
    pub fn new(metadata_reader: MR) -> Self {
        Self { metadata_reader }
    }

    /// Executes the BOM generation use case
    ///
    /// Reads the package records from the metadata document and stamps a
    /// fresh BOM identity (timestamp, serial number, tool and root-component
    /// identity). No state is retained between invocations.
    ///
    /// # Arguments
    /// * `request` - Generation request containing the metadata path
    ///
    /// # Returns
    /// BomResponse containing the package records and the BOM identity
    pub fn execute(&self, request: BomRequest) -> Result<BomResponse> {
        let records = self.metadata_reader.read_packages(&request.metadata_path)?;
        let identity = BomGenerator::generate_default_identity();

        Ok(BomResponse::new(records, identity))
    }
}
