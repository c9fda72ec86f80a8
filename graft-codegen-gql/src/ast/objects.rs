//! GraphQL object type builder.

use graft_codegen::{CodeFragment, Renderable};

use super::InputValue;

/// A field on an object type, with optional arguments.
#[derive(Debug, Clone)]
pub struct FieldDef {
    pub name: String,
    pub ty: String,
    pub arguments: Vec<InputValue>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.arguments.push(InputValue::new(name, ty));
        self
    }

    pub fn args(mut self, arguments: impl IntoIterator<Item = InputValue>) -> Self {
        self.arguments.extend(arguments);
        self
    }

    fn render_line(&self) -> String {
        if self.arguments.is_empty() {
            format!("{}: {}", self.name, self.ty)
        } else {
            let args = self
                .arguments
                .iter()
                .map(|a| format!("{}: {}", a.name, a.ty))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({}): {}", self.name, args, self.ty)
        }
    }
}

impl Renderable for FieldDef {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.render_line())]
    }
}

/// Builder for GraphQL object types (`type Foo { ... }`).
#[derive(Debug, Clone)]
pub struct ObjectType {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("type {} {{", self.name),
            self.fields.iter().flat_map(Renderable::to_fragments).collect(),
            "}",
        )]
    }
}
