//! GraphQL type extension builder.

use graft_codegen::{CodeFragment, Renderable};

use super::FieldDef;

/// Builder for type extensions (`extend type Query { ... }`).
#[derive(Debug, Clone)]
pub struct TypeExtension {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl TypeExtension {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn query() -> Self {
        Self::new("Query")
    }

    pub fn mutation() -> Self {
        Self::new("Mutation")
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for TypeExtension {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("extend type {} {{", self.name),
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
    fn extend_query() {
        let ext = TypeExtension::query().field(FieldDef::new("testGetProject", "TestProject").arg("id", "ID!"));
        let mut builder = CodeBuilder::new(Indent::GRAPHQL);
        builder.emit(&ext);
        assert_eq!(
            builder.build(),
            "extend type Query {\n  testGetProject(id: ID!): TestProject\n}\n"
        );
    }
}
