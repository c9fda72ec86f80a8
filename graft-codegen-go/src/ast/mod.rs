//! Go source builders.

mod file;
mod imports;
mod structs;

pub use file::GoFile;
pub use imports::{Import, ImportBlock};
pub use structs::{GoField, GoStruct};
