//! Shared primitives for the graft code generators.
//!
//! This crate holds everything the per-target generator crates have in
//! common: the indentation-aware [`CodeBuilder`], the [`CodeFragment`] /
//! [`Renderable`] intermediate representation, the naming conventions that
//! keep the schema document and the handler source referring to each other
//! by the same composed names, and the write rules for generated files.

pub mod builder;
pub mod file;
pub mod naming;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use file::{File, FileRules, Overwrite, WriteResult};
pub use naming::Verb;
