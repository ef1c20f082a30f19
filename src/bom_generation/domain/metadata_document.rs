use crate::bom_generation::domain::PackageRecord;
use crate::shared::error::BomError;
use crate::shared::Result;
use serde::Deserialize;

/// Deserialized shape of the metadata document
///
/// An absent `packages` key is treated as an empty list, so a metadata
/// document of `{}` produces a BOM with zero components rather than an error.
#[derive(Debug, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    packages: Vec<RawPackageRecord>,
}

/// Raw package entry before required-field validation
///
/// All fields deserialize as optional so that a missing `name` or `version`
/// can be reported per record instead of failing the whole decode.
#[derive(Debug, Deserialize)]
struct RawPackageRecord {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    license: Option<String>,
    license_file: Option<String>,
}

impl MetadataDocument {
    /// Parses a metadata document from its JSON text
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Validates every entry and converts it into a domain PackageRecord,
    /// preserving input order
    ///
    /// # Errors
    /// Returns `BomError::MissingField` for the first record that lacks
    /// `name` or `version`.
    pub fn into_records(self) -> Result<Vec<PackageRecord>> {
        self.packages
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_record(index))
            .collect()
    }
}

impl RawPackageRecord {
    fn into_record(self, index: usize) -> Result<PackageRecord> {
        let name = self
            .name
            .ok_or(BomError::MissingField { index, field: "name" })?;
        let version = self.version.ok_or(BomError::MissingField {
            index,
            field: "version",
        })?;

        Ok(PackageRecord::new(
            name,
            version,
            self.description,
            self.license,
            self.license_file,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_convert_full_document() {
        let content = r#"
        {
            "packages": [
                {"name": "left-pad", "version": "1.3.0", "license": "MIT"},
                {"name": "some-lib", "version": "2.0.0", "license_file": "LICENSE.txt"},
                {"name": "no-meta", "version": "0.0.1"}
            ]
        }
        "#;

        let records = MetadataDocument::parse(content)
            .unwrap()
            .into_records()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name(), "left-pad");
        assert_eq!(records[0].license(), Some("MIT"));
        assert_eq!(records[1].license_file(), Some("LICENSE.txt"));
        assert_eq!(records[2].license(), None);
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let content = r#"
        {
            "packages": [
                {"name": "c", "version": "3.0.0"},
                {"name": "a", "version": "1.0.0"},
                {"name": "b", "version": "2.0.0"}
            ]
        }
        "#;

        let records = MetadataDocument::parse(content)
            .unwrap()
            .into_records()
            .unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_missing_packages_key_is_empty() {
        let records = MetadataDocument::parse("{}")
            .unwrap()
            .into_records()
            .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = MetadataDocument::parse("not json at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let content = r#"{"packages": [{"version": "1.0.0"}]}"#;

        let result = MetadataDocument::parse(content).unwrap().into_records();

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("record #0"));
        assert!(err_string.contains("\"name\""));
    }

    #[test]
    fn test_missing_version_is_rejected() {
        let content = r#"
        {
            "packages": [
                {"name": "ok", "version": "1.0.0"},
                {"name": "broken"}
            ]
        }
        "#;

        let result = MetadataDocument::parse(content).unwrap().into_records();

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("record #1"));
        assert!(err_string.contains("\"version\""));
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let content = r#"
        {
            "packages": [
                {"name": "pkg", "version": "1.0.0", "homepage": "https://example.com"}
            ],
            "generated_by": "something"
        }
        "#;

        let records = MetadataDocument::parse(content)
            .unwrap()
            .into_records()
            .unwrap();

        assert_eq!(records.len(), 1);
    }
}
