//! GraphQL SDL builders.

mod document;
mod extensions;
mod inputs;
mod objects;

pub use document::{Definition, Document};
pub use extensions::TypeExtension;
pub use inputs::{InputType, InputValue};
pub use objects::{FieldDef, ObjectType};
