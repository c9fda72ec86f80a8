//! Service manifest parsing and validation.

use std::{path::Path, str::FromStr};

use crate::{Error, Result, Service};

impl FromStr for Service {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_service(s, "service.toml")
    }
}

impl Service {
    /// Parse a service manifest from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_service(&content, &path.display().to_string())
    }

    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_service(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_service(content: &str, filename: &str) -> Result<Service> {
    let service: Service = toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
    validate_service(&service, content, filename)?;
    Ok(service)
}

/// Validate the service after parsing.
///
/// The generators trust these invariants: non-empty identifiers, no declared
/// `id` field (the leading identifier is synthesized), and field names unique
/// case-insensitively within each entity (the transcoder matches field names
/// case-insensitively, so two fields differing only in case would collide).
fn validate_service(service: &Service, src: &str, filename: &str) -> Result<()> {
    let err = |message: String| Error::validation(message, src, filename);

    if service.name.trim().is_empty() {
        return Err(err("service name must not be empty".into()));
    }

    for enum_def in &service.enums {
        if enum_def.name.trim().is_empty() {
            return Err(err("enum name must not be empty".into()));
        }
        if enum_def.values.is_empty() {
            return Err(err(format!("enum '{}' must declare at least one value", enum_def.name)));
        }
    }

    let mut entity_names: Vec<String> = Vec::new();
    for entity in &service.entities {
        if entity.name.trim().is_empty() {
            return Err(err("entity name must not be empty".into()));
        }
        let lowered = entity.name.to_lowercase();
        if entity_names.contains(&lowered) {
            return Err(err(format!("duplicate entity '{}'", entity.name)));
        }
        entity_names.push(lowered);

        let mut field_names: Vec<String> = Vec::new();
        for field in &entity.fields {
            if field.name.trim().is_empty() {
                return Err(err(format!("entity '{}' has a field with an empty name", entity.name)));
            }
            let lowered = field.name.to_lowercase();
            if lowered == "id" {
                return Err(err(format!(
                    "entity '{}' declares a field named 'id'; the identifier field is added automatically",
                    entity.name
                )));
            }
            if field_names.contains(&lowered) {
                return Err(err(format!(
                    "entity '{}' declares field '{}' more than once (field names are matched case-insensitively)",
                    entity.name, field.name
                )));
            }
            field_names.push(lowered);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;

    const MANIFEST: &str = r#"
name = "client"

[[enums]]
name = "project-type"
values = ["not-assigned", "internal", "billable"]

[[entities]]
name = "project"
persistence = "db"

[[entities.fields]]
name = "name_of_project"
type = "string"

[[entities.fields]]
name = "not_mandatory"
type = "integer"
nullable = true

[[entities.fields]]
name = "kind"
type = "enum"
searchable = true
"#;

    #[test]
    fn parses_full_manifest() {
        let service: Service = MANIFEST.parse().unwrap();
        assert_eq!(service.name, "client");
        assert_eq!(service.enums.len(), 1);
        assert_eq!(service.enums[0].values[0], "not-assigned");

        let entity = &service.entities[0];
        assert_eq!(entity.name, "project");
        assert_eq!(entity.persistence.as_deref(), Some("db"));
        assert_eq!(entity.fields.len(), 3);
        assert_eq!(entity.fields[0].ty, FieldType::Str);
        assert!(entity.fields[1].is_nullable);
        assert!(entity.fields[2].is_searchable);
    }

    #[test]
    fn rejects_unknown_field_type() {
        let manifest = r#"
name = "client"

[[entities]]
name = "project"

[[entities.fields]]
name = "size"
type = "bignum"
"#;
        let err = manifest.parse::<Service>().unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn rejects_declared_id_field() {
        let manifest = r#"
name = "client"

[[entities]]
name = "project"

[[entities.fields]]
name = "Id"
type = "id"
"#;
        let err = manifest.parse::<Service>().unwrap_err();
        assert!(err.to_string().contains("added automatically"));
    }

    #[test]
    fn rejects_case_insensitive_duplicate_fields() {
        let manifest = r#"
name = "client"

[[entities]]
name = "project"

[[entities.fields]]
name = "owner"
type = "string"

[[entities.fields]]
name = "Owner"
type = "string"
"#;
        let err = manifest.parse::<Service>().unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn rejects_empty_service_name() {
        let err = "name = \"\"".parse::<Service>().unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
