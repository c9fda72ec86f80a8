//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use graft_codegen::builder::{CodeBuilder, Indent};
///
/// let code = CodeBuilder::new(Indent::GO)
///     .line("func main() {")
///     .indent()
///     .line("run()")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\trun()\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add pre-rendered text verbatim (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line.
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a header, an indented body, and a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_line() {
        let code = CodeBuilder::new(Indent::GO).line("var x int32").build();
        assert_eq!(code, "var x int32\n");
    }

    #[test]
    fn indentation_uses_configured_unit() {
        let code = CodeBuilder::new(Indent::GRAPHQL)
            .line("type Query {")
            .indent()
            .line("version: String!")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "type Query {\n  version: String!\n}\n");
    }

    #[test]
    fn block_with_close() {
        let code = CodeBuilder::new(Indent::GO)
            .block_with_close("type Root struct {", "}", |b| b.line("srv *server.Server"))
            .build();

        assert_eq!(code, "type Root struct {\n\tsrv *server.Server\n}\n");
    }

    #[test]
    fn conditional_and_each() {
        let code = CodeBuilder::new(Indent::GO)
            .when(false, |b| b.line("skipped"))
            .each(["a", "b"], |b, s| b.line(s))
            .build();

        assert_eq!(code, "a\nb\n");
    }

    #[test]
    fn raw_is_not_reindented() {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.push_indent();
        builder.apply_fragment(CodeFragment::raw("already\nrendered\n"));
        assert_eq!(builder.build(), "already\nrendered\n");
    }

    #[test]
    fn emit_block_fragment() {
        let mut builder = CodeBuilder::new(Indent::GO);
        builder.emit(&CodeFragment::block(
            "func main() {",
            vec![CodeFragment::line("run()")],
            "}",
        ));
        assert_eq!(builder.build(), "func main() {\n\trun()\n}\n");
    }
}
