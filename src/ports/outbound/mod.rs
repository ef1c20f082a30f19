/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, output format, etc.).
pub mod bom_formatter;
pub mod metadata_reader;
pub mod output_presenter;

pub use bom_formatter::BomFormatter;
pub use metadata_reader::MetadataReader;
pub use output_presenter::OutputPresenter;
