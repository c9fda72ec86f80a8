//! GraphQL input type builder.

use graft_codegen::{CodeFragment, Renderable};

/// A named value: an input-type field or a field argument.
#[derive(Debug, Clone)]
pub struct InputValue {
    pub name: String,
    pub ty: String,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl Renderable for InputValue {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("{}: {}", self.name, self.ty))]
    }
}

/// Builder for GraphQL input types (`input Foo { ... }`).
#[derive(Debug, Clone)]
pub struct InputType {
    pub name: String,
    pub fields: Vec<InputValue>,
}

impl InputType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(InputValue::new(name, ty));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Renderable for InputType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("input {} {{", self.name),
            self.fields.iter().flat_map(Renderable::to_fragments).collect(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use graft_codegen::{CodeBuilder, Indent};

    use super::*;

    #[test]
    fn input_type_with_fields() {
        let i = InputType::new("PaginationInput")
            .field("Limit", "Int")
            .field("Offset", "Int");
        let mut builder = CodeBuilder::new(Indent::GRAPHQL);
        builder.emit(&i);
        assert_eq!(
            builder.build(),
            "input PaginationInput {\n  Limit: Int\n  Offset: Int\n}\n"
        );
    }

    #[test]
    fn empty_check() {
        assert!(InputType::new("FilterProject").is_empty());
        assert!(!InputType::new("FilterProject").field("verified", "Boolean").is_empty());
    }
}
