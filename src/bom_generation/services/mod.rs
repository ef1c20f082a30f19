/// Domain services - Stateless operations on domain objects
pub mod bom_generator;

pub use bom_generator::BomGenerator;
