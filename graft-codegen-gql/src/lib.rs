//! GraphQL schema document generation.
//!
//! Builds the SDL document tree for a service (object types, input types,
//! Query/Mutation extensions, pagination and filter types) and renders it
//! with a deterministic pretty-printer: identical services render to
//! byte-identical documents.

pub mod ast;
pub mod schema;
pub mod type_map;

pub use ast::{Definition, Document, FieldDef, InputType, InputValue, ObjectType, TypeExtension};
pub use schema::SchemaGenerator;
