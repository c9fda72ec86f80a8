//! The schema document: an ordered sequence of definitions.

use graft_codegen::{CodeBuilder, Indent, Renderable};

use super::{InputType, ObjectType, TypeExtension};

/// A top-level definition in a schema document.
#[derive(Debug, Clone)]
pub enum Definition {
    Object(ObjectType),
    Input(InputType),
    Extension(TypeExtension),
}

impl From<ObjectType> for Definition {
    fn from(t: ObjectType) -> Self {
        Definition::Object(t)
    }
}

impl From<InputType> for Definition {
    fn from(t: InputType) -> Self {
        Definition::Input(t)
    }
}

impl From<TypeExtension> for Definition {
    fn from(t: TypeExtension) -> Self {
        Definition::Extension(t)
    }
}

impl Renderable for Definition {
    fn to_fragments(&self) -> Vec<graft_codegen::CodeFragment> {
        match self {
            Definition::Object(t) => t.to_fragments(),
            Definition::Input(t) => t.to_fragments(),
            Definition::Extension(t) => t.to_fragments(),
        }
    }
}

/// An ordered schema document. Rendering is deterministic: identical
/// definition sequences render to byte-identical text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    definitions: Vec<Definition>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, definition: impl Into<Definition>) {
        self.definitions.push(definition.into());
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Pretty-print the document: definitions separated by one blank line,
    /// two-space indentation, trailing newline.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GRAPHQL);
        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            builder.emit(definition);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::FieldDef;

    #[test]
    fn renders_definitions_with_blank_lines_between() {
        let mut doc = Document::new();
        doc.push(ObjectType::new("A").field(FieldDef::new("x", "Int")));
        doc.push(InputType::new("B").field("y", "String"));

        assert_eq!(
            doc.render(),
            "type A {\n  x: Int\n}\n\ninput B {\n  y: String\n}\n"
        );
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(Document::new().render(), "");
    }
}
