//! Go import block builder.

use graft_codegen::{CodeFragment, Renderable};

/// A single import, optionally aliased.
#[derive(Debug, Clone)]
pub struct Import {
    pub path: String,
    pub alias: Option<String>,
}

impl Import {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: None,
        }
    }

    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alias: Some(alias.into()),
        }
    }

    fn render_spec(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

/// An ordered import block. Imports render in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ImportBlock {
    imports: Vec<Import>,
}

impl ImportBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

impl Renderable for ImportBlock {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self.imports.len() {
            0 => vec![],
            1 => vec![CodeFragment::line(format!(
                "import {}",
                self.imports[0].render_spec()
            ))],
            _ => vec![CodeFragment::block(
                "import (",
                self.imports
                    .iter()
                    .map(|i| CodeFragment::line(i.render_spec()))
                    .collect(),
                ")",
            )],
        }
    }
}
