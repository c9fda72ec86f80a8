//! Field type to GraphQL type mapping.

use graft_codegen::naming;
use graft_ir::{Field, FieldType};

/// The base scalar for a field type. Enums and timestamps surface as strings
/// (symbolic names and RFC 3339 text respectively); nested inputs surface as
/// the referenced type name.
pub fn scalar(ty: &FieldType) -> String {
    match ty {
        FieldType::Id => "ID".into(),
        FieldType::Str => "String".into(),
        FieldType::Int => "Int".into(),
        FieldType::UInt => "Int".into(),
        FieldType::Bool => "Boolean".into(),
        FieldType::Enum => "String".into(),
        FieldType::Timestamp => "String".into(),
        FieldType::Input(name) => name.clone(),
    }
}

/// The rendered type for an entity field: arrays are prefixed `[]`,
/// non-nullable fields carry a `!` suffix.
pub fn field_type(field: &Field) -> String {
    let array = if field.is_array { "[]" } else { "" };
    let bang = if field.is_nullable { "" } else { "!" };
    format!("{}{}{}", array, scalar(&field.ty), bang)
}

/// The rendered type for a filter-input field. Filters are always optional,
/// and a searchable enum filters through its nullable-wrapper input type,
/// named after the field.
pub fn filter_type(field: &Field) -> String {
    match field.ty {
        FieldType::Enum => naming::pascal(&field.name),
        _ => scalar(&field.ty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_mapping() {
        assert_eq!(scalar(&FieldType::Id), "ID");
        assert_eq!(scalar(&FieldType::UInt), "Int");
        assert_eq!(scalar(&FieldType::Timestamp), "String");
        assert_eq!(scalar(&FieldType::Input("PaginationInput".into())), "PaginationInput");
    }

    #[test]
    fn field_types_carry_nullability_and_arrays() {
        assert_eq!(field_type(&Field::new("name", FieldType::Str)), "String!");
        assert_eq!(field_type(&Field::new("n", FieldType::Int).nullable()), "Int");
        assert_eq!(field_type(&Field::new("xs", FieldType::UInt).array()), "[]Int!");
    }

    #[test]
    fn filter_types_are_bare() {
        assert_eq!(filter_type(&Field::new("verified", FieldType::Bool)), "Boolean");
        assert_eq!(filter_type(&Field::new("owner", FieldType::Id)), "ID");
        assert_eq!(filter_type(&Field::new("project_type", FieldType::Enum)), "ProjectType");
    }
}
