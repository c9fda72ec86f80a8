//! Structural editing of the resolver aggregator file.
//!
//! The aggregator (`root.go`) collects one resolver handle per module. It
//! was produced by this generator, so its shape is known exactly: one
//! aggregate struct and one constructor whose body is a single
//! composite-literal return. The edit locates both by name, splices in the
//! new field and constructor entry, and leaves every other byte unchanged.
//!
//! The edit deliberately performs no existence check: running it twice for
//! one module duplicates the field and the entry. Installation is expected
//! to run once per module; the duplicate is the documented contract.

use std::path::{Path, PathBuf};

use graft_codegen::naming;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
    #[error("aggregate type '{0}' not found")]
    MissingAggregate(String),

    #[error("aggregate type '{0}' is declared more than once")]
    AmbiguousAggregate(String),

    #[error("constructor '{0}' not found")]
    MissingConstructor(String),

    #[error("constructor '{0}' is declared more than once")]
    AmbiguousConstructor(String),

    #[error("constructor '{0}' does not contain a single composite-literal return")]
    UnexpectedShape(String),

    #[error("unterminated block in aggregator source")]
    Unterminated,

    #[error("failed to read aggregator file '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write aggregator file '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One aggregator edit: add the resolver for a (module, service) pair.
pub struct AggregatorEdit {
    aggregate: String,
    resolver: String,
}

impl AggregatorEdit {
    pub fn new(module: &str, service: &str) -> Self {
        Self {
            aggregate: "Root".into(),
            resolver: naming::resolver_type_name(module, service),
        }
    }

    /// Target a differently named aggregate type (and its `New<name>`
    /// constructor).
    pub fn aggregate(mut self, name: impl Into<String>) -> Self {
        self.aggregate = name.into();
        self
    }

    /// Apply the edit to the aggregator source, returning the new text.
    pub fn apply(&self, source: &str) -> Result<String, AggregatorError> {
        let lines = line_spans(source);

        let struct_header = format!("type {} struct {{", self.aggregate);
        let struct_idx = find_single(
            &lines,
            &struct_header,
            || AggregatorError::MissingAggregate(self.aggregate.clone()),
            || AggregatorError::AmbiguousAggregate(self.aggregate.clone()),
        )?;
        let struct_close = find_block_close(&lines, struct_idx)?;

        let ctor_name = format!("New{}", self.aggregate);
        let ctor_header = format!("func {}() *{} {{", ctor_name, self.aggregate);
        let ctor_idx = find_single(
            &lines,
            &ctor_header,
            || AggregatorError::MissingConstructor(ctor_name.clone()),
            || AggregatorError::AmbiguousConstructor(ctor_name.clone()),
        )?;
        let literal_close = self.find_composite_close(&lines, ctor_idx, &ctor_name)?;

        let field_line = format!("\t{}\n", self.resolver);
        let entry_line = format!("\t\t{}: New{}(),\n", self.resolver, self.resolver);

        let mut insertions = [
            (lines[struct_close].0, field_line),
            (lines[literal_close].0, entry_line),
        ];
        insertions.sort_by(|a, b| b.0.cmp(&a.0));

        let mut out = source.to_string();
        for (offset, text) in insertions {
            out.insert_str(offset, &text);
        }
        Ok(out)
    }

    /// Locate the closing line of the composite literal returned by the
    /// constructor. The constructor must hold exactly the shape this
    /// generator scaffolds: a single top-level `return &<Aggregate>{`.
    fn find_composite_close(
        &self,
        lines: &[(usize, &str)],
        ctor_idx: usize,
        ctor_name: &str,
    ) -> Result<usize, AggregatorError> {
        let return_header = format!("return &{}{{", self.aggregate);
        let mut depth = 1i32;
        for (i, (_, line)) in lines.iter().enumerate().skip(ctor_idx + 1) {
            if depth == 1 && line.trim() == return_header {
                return find_block_close(lines, i);
            }
            depth += brace_delta(line);
            if depth <= 0 {
                break;
            }
        }
        Err(AggregatorError::UnexpectedShape(ctor_name.to_string()))
    }
}

/// Read, edit, and overwrite the aggregator file for one (module, service).
pub fn update_aggregator(path: &Path, module: &str, service: &str) -> Result<(), AggregatorError> {
    let source = std::fs::read_to_string(path).map_err(|e| AggregatorError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let edited = AggregatorEdit::new(module, service).apply(&source)?;
    std::fs::write(path, edited).map_err(|e| AggregatorError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Lines with their byte offsets; each keeps its trailing newline.
fn line_spans(source: &str) -> Vec<(usize, &str)> {
    let mut offset = 0;
    let mut lines = Vec::new();
    for line in source.split_inclusive('\n') {
        lines.push((offset, line));
        offset += line.len();
    }
    lines
}

fn content(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}

fn brace_delta(line: &str) -> i32 {
    line.bytes().fold(0, |d, b| match b {
        b'{' => d + 1,
        b'}' => d - 1,
        _ => d,
    })
}

/// The index of the single line matching `header` exactly. Zero or multiple
/// matches mean the file has drifted from this generator's conventions.
fn find_single(
    lines: &[(usize, &str)],
    header: &str,
    missing: impl FnOnce() -> AggregatorError,
    ambiguous: impl FnOnce() -> AggregatorError,
) -> Result<usize, AggregatorError> {
    let mut found = None;
    for (i, (_, line)) in lines.iter().enumerate() {
        if content(line) == header {
            if found.is_some() {
                return Err(ambiguous());
            }
            found = Some(i);
        }
    }
    found.ok_or_else(missing)
}

/// The index of the line that closes the block opened on `open_idx`.
fn find_block_close(lines: &[(usize, &str)], open_idx: usize) -> Result<usize, AggregatorError> {
    let mut depth = 1i32;
    for (i, (_, line)) in lines.iter().enumerate().skip(open_idx + 1) {
        depth += brace_delta(line);
        if depth <= 0 {
            return Ok(i);
        }
    }
    Err(AggregatorError::Unterminated)
}
