use crate::bom_generation::domain::{BomIdentity, PackageRecord};

/// BomResponse DTO carrying the result of a generation run
///
/// The records are in input order; the identity is freshly generated for
/// this invocation.
#[derive(Debug, Clone)]
pub struct BomResponse {
    pub records: Vec<PackageRecord>,
    pub identity: BomIdentity,
}

impl BomResponse {
    pub fn new(records: Vec<PackageRecord>, identity: BomIdentity) -> Self {
        Self { records, identity }
    }
}
