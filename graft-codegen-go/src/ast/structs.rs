//! Go struct declaration builder.

use graft_codegen::{CodeFragment, Renderable};

/// A field in a Go struct. A field without a type is rendered embedded.
#[derive(Debug, Clone)]
pub struct GoField {
    pub name: String,
    pub ty: Option<String>,
}

impl GoField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }

    pub fn embedded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
        }
    }

    fn render_line(&self) -> String {
        match &self.ty {
            Some(ty) => format!("{} {}", self.name, ty),
            None => self.name.clone(),
        }
    }
}

/// Builder for Go struct type declarations.
#[derive(Debug, Clone)]
pub struct GoStruct {
    pub name: String,
    pub fields: Vec<GoField>,
}

impl GoStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(GoField::new(name, ty));
        self
    }

    pub fn embedded(mut self, name: impl Into<String>) -> Self {
        self.fields.push(GoField::embedded(name));
        self
    }
}

impl Renderable for GoStruct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("type {} struct {{", self.name),
            self.fields
                .iter()
                .map(|f| CodeFragment::line(f.render_line()))
                .collect(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use graft_codegen::{CodeBuilder, Indent};

    use super::*;

    fn render(s: &GoStruct) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.emit(s);
        builder.build()
    }

    #[test]
    fn struct_with_fields() {
        let s = GoStruct::new("ProjectsGetProjectRequest").field("ID", "graphql.ID");
        assert_eq!(
            render(&s),
            "type ProjectsGetProjectRequest struct {\n\tID graphql.ID\n}\n"
        );
    }

    #[test]
    fn embedded_field_has_no_type() {
        let s = GoStruct::new("Root").embedded("VersionResolver");
        assert_eq!(render(&s), "type Root struct {\n\tVersionResolver\n}\n");
    }

    #[test]
    fn empty_struct() {
        let s = GoStruct::new("Empty");
        assert_eq!(render(&s), "type Empty struct {\n}\n");
    }
}
