//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes convert themselves into fragments; a file renderer applies the
//! fragments to a [`CodeBuilder`](super::CodeBuilder). Fragments are the seam
//! that lets tree-built declarations and opaque pre-rendered text blocks live
//! in one output file without two rendering paths disagreeing on formatting.

/// A piece of generated code, independent of indentation context.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended on render).
    Line(String),
    /// A blank line.
    Blank,
    /// Pre-rendered text emitted verbatim, without re-indentation.
    Raw(String),
    /// A header line, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Fragments emitted in order at the current indentation.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    pub fn block(header: impl Into<String>, body: Vec<CodeFragment>, close: impl Into<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: Some(close.into()),
        }
    }
}

/// Types that can be rendered as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl Renderable for CodeFragment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.clone()]
    }
}
