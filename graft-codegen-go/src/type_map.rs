//! Shape field to Go type mapping for surface record declarations.

use crate::transcode::{ShapeField, ShapeType};

/// The Go type a shape field is declared with on a surface record.
/// Nullable fields become pointers, arrays become slices (`[]*T` when both).
pub fn go_type(field: &ShapeField) -> String {
    let base = match &field.ty {
        ShapeType::Id => "graphql.ID".to_string(),
        ShapeType::Str => "string".to_string(),
        ShapeType::Int32 => "int32".to_string(),
        ShapeType::Uint32 => "uint32".to_string(),
        ShapeType::Bool => "bool".to_string(),
        ShapeType::Named(name) => name.clone(),
        // Wire-only kinds; surface records never declare these, but the
        // mapping stays total with their wire spellings.
        ShapeType::BoxedBool => "*wrapperspb.BoolValue".to_string(),
        ShapeType::Timestamp => "*timestamppb.Timestamp".to_string(),
        ShapeType::Enum(name) => format!("pb.{}", name),
        ShapeType::Internal => "protoimpl.MessageState".to_string(),
    };

    let base = if field.optional { format!("*{}", base) } else { base };
    if field.repeated { format!("[]{}", base) } else { base }
}
