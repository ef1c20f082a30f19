/// Formatter adapters - Concrete document format implementations
pub mod cyclonedx_formatter;

pub use cyclonedx_formatter::CycloneDxFormatter;
