//! Service, entity, and field definitions.

use std::str::FromStr;

use serde::Deserialize;

/// A service description: the unit of one generation run.
#[derive(Debug, Clone, Deserialize)]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

impl Service {
    /// True if any entity has a field that is both searchable and an enum.
    /// Those fields need the nullable-wrapper types in both artifacts.
    pub fn has_searchable_enum(&self) -> bool {
        self.entities.iter().any(|e| !e.searchable_enum_fields().is_empty())
    }

    /// True if any entity carries a timestamp field.
    pub fn has_timestamp(&self) -> bool {
        self.entities
            .iter()
            .any(|e| e.fields.iter().any(|f| f.ty == FieldType::Timestamp))
    }

    /// True if any entity carries a nullable boolean field.
    pub fn has_boxed_bool(&self) -> bool {
        self.entities
            .iter()
            .any(|e| e.fields.iter().any(|f| f.ty == FieldType::Bool && f.is_nullable))
    }
}

/// A named enumeration. Values are opaque symbolic tags; by convention the
/// first value is the unset/not-assigned tag.
#[derive(Debug, Clone, Deserialize)]
pub struct Enum {
    pub name: String,
    pub values: Vec<String>,
}

/// An entity: a named record with an implicit leading identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub name: String,
    /// Opaque storage-backend marker; the generators only test presence.
    #[serde(default)]
    pub persistence: Option<String>,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            persistence: None,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Fields eligible for the generated filter input: searchable and of a
    /// filterable type (boolean, enum, identifier).
    pub fn filterable_fields(&self) -> Vec<&Field> {
        self.fields.iter().filter(|f| f.is_filterable()).collect()
    }

    /// Searchable enum fields; each one needs a nullable-wrapper type.
    pub fn searchable_enum_fields(&self) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|f| f.is_searchable && f.ty == FieldType::Enum)
            .collect()
    }
}

/// A single field on an entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: FieldType,
    #[serde(default, rename = "array")]
    pub is_array: bool,
    #[serde(default, rename = "nullable")]
    pub is_nullable: bool,
    #[serde(default, rename = "searchable")]
    pub is_searchable: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            is_array: false,
            is_nullable: false,
            is_searchable: false,
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.is_searchable = true;
        self
    }

    pub fn is_filterable(&self) -> bool {
        self.is_searchable
            && matches!(self.ty, FieldType::Bool | FieldType::Enum | FieldType::Id)
    }
}

/// The closed set of field types.
///
/// [`FieldType::Input`] references another generated record by name; it is
/// used for generator-synthesized records (pagination, filters) and is not
/// accepted in manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Id,
    Str,
    Int,
    UInt,
    Bool,
    Enum,
    Timestamp,
    Input(String),
}

impl FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(FieldType::Id),
            "string" => Ok(FieldType::Str),
            "integer" => Ok(FieldType::Int),
            "unsigned" => Ok(FieldType::UInt),
            "boolean" => Ok(FieldType::Bool),
            "enum" => Ok(FieldType::Enum),
            "timestamp" => Ok(FieldType::Timestamp),
            other => Err(format!(
                "unknown field type '{}'; expected one of id, string, integer, unsigned, boolean, enum, timestamp",
                other
            )),
        }
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searchable_enum(name: &str) -> Field {
        Field::new(name, FieldType::Enum).searchable()
    }

    #[test]
    fn field_type_from_str() {
        assert_eq!("id".parse::<FieldType>().unwrap(), FieldType::Id);
        assert_eq!("unsigned".parse::<FieldType>().unwrap(), FieldType::UInt);
        assert!("strng".parse::<FieldType>().is_err());
    }

    #[test]
    fn filterable_requires_searchable_and_type() {
        assert!(Field::new("verified", FieldType::Bool).searchable().is_filterable());
        assert!(searchable_enum("status").is_filterable());
        assert!(Field::new("owner", FieldType::Id).searchable().is_filterable());
        // searchable string is not filterable
        assert!(!Field::new("name", FieldType::Str).searchable().is_filterable());
        // non-searchable boolean is not filterable
        assert!(!Field::new("verified", FieldType::Bool).is_filterable());
    }

    #[test]
    fn searchable_enum_detection() {
        let entity = Entity::new("project")
            .field(Field::new("name", FieldType::Str))
            .field(searchable_enum("status"));
        let service = Service {
            name: "client".into(),
            enums: vec![],
            entities: vec![entity],
        };
        assert!(service.has_searchable_enum());
        assert_eq!(service.entities[0].searchable_enum_fields().len(), 1);
    }

    #[test]
    fn timestamp_and_boxed_bool_detection() {
        let entity = Entity::new("event")
            .field(Field::new("starts_at", FieldType::Timestamp))
            .field(Field::new("visible", FieldType::Bool).nullable());
        let service = Service {
            name: "events".into(),
            enums: vec![],
            entities: vec![entity],
        };
        assert!(service.has_timestamp());
        assert!(service.has_boxed_bool());
    }
}
