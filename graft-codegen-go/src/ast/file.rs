//! A Go source file as an ordered list of chunks.
//!
//! Part of the handler artifact is tree-built (struct declarations) and part
//! is pre-rendered text (converter functions, verb templates). Both become
//! chunks here and render by concatenation in one pass, so there is a single
//! formatting authority for the whole file.

use graft_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use super::{Import, ImportBlock};

/// A Go source file: package clause, import block, then body chunks
/// separated by blank lines.
#[derive(Debug, Clone)]
pub struct GoFile {
    package: String,
    imports: ImportBlock,
    chunks: Vec<Vec<CodeFragment>>,
}

impl GoFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: ImportBlock::new(),
            chunks: Vec::new(),
        }
    }

    pub fn import(&mut self, path: impl Into<String>) -> &mut Self {
        self.imports.push(Import::new(path));
        self
    }

    pub fn import_as(&mut self, path: impl Into<String>, alias: impl Into<String>) -> &mut Self {
        self.imports.push(Import::aliased(path, alias));
        self
    }

    /// Add a tree-built declaration as a chunk.
    pub fn add(&mut self, node: &impl Renderable) -> &mut Self {
        self.chunks.push(node.to_fragments());
        self
    }

    /// Add a pre-rendered text block as a chunk. A trailing newline is
    /// ensured so chunk boundaries stay line boundaries.
    pub fn add_raw(&mut self, text: impl Into<String>) -> &mut Self {
        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        self.chunks.push(vec![CodeFragment::Raw(text)]);
        self
    }

    /// Render the whole file in one pass.
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.push_line(&format!("package {}", self.package));

        if !self.imports.is_empty() {
            builder.push_blank();
            builder.emit(&self.imports);
        }

        for fragments in &self.chunks {
            builder.push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }
}
