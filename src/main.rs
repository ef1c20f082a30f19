use onyx_sbom::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use onyx_sbom::adapters::outbound::formatters::CycloneDxFormatter;
use onyx_sbom::application::dto::BomRequest;
use onyx_sbom::application::use_cases::GenerateBomUseCase;
use onyx_sbom::cli::Args;
use onyx_sbom::ports::outbound::{BomFormatter, OutputPresenter};
use onyx_sbom::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create adapters (Dependency Injection)
    let metadata_reader = FileSystemReader::new();

    // Create use case with injected dependency and execute
    let use_case = GenerateBomUseCase::new(metadata_reader);
    let response = use_case.execute(BomRequest::new(args.metadata))?;

    // Format the BOM document
    let formatter = CycloneDxFormatter::new();
    let formatted_output = formatter.format(&response.identity, &response.records)?;

    // Present output
    let presenter = FileSystemWriter::new(args.output);
    presenter.present(&formatted_output)?;

    Ok(())
}
