use clap::Parser;
use std::path::PathBuf;

/// Generate a CycloneDX 1.4 BOM from a package metadata document
#[derive(Parser, Debug)]
#[command(name = "onyx-sbom")]
#[command(version)]
#[command(about = "Generate a CycloneDX 1.4 BOM from a package metadata document", long_about = None)]
pub struct Args {
    /// Path to the package metadata document
    #[arg(short, long, default_value = "metadata.json")]
    pub metadata: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "BOM.json")]
    pub output: PathBuf,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let args = Args::try_parse_from(["onyx-sbom"]).unwrap();
        assert_eq!(args.metadata, PathBuf::from("metadata.json"));
        assert_eq!(args.output, PathBuf::from("BOM.json"));
    }

    #[test]
    fn test_explicit_paths() {
        let args =
            Args::try_parse_from(["onyx-sbom", "-m", "deps.json", "-o", "out/bom.json"]).unwrap();
        assert_eq!(args.metadata, PathBuf::from("deps.json"));
        assert_eq!(args.output, PathBuf::from("out/bom.json"));
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "onyx-sbom",
            "--metadata",
            "deps.json",
            "--output",
            "bom.json",
        ])
        .unwrap();
        assert_eq!(args.metadata, PathBuf::from("deps.json"));
        assert_eq!(args.output, PathBuf::from("bom.json"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Args::try_parse_from(["onyx-sbom", "--invalid-option"]);
        assert!(result.is_err());
    }
}
