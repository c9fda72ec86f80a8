//! The declarative service model consumed by the graft generators.
//!
//! A [`Service`] describes entities, fields, and enums; it is supplied fresh
//! on every generation run (usually parsed from a `service.toml` manifest)
//! and never persisted by this system.

mod error;
mod manifest;
mod service;

pub use error::{Error, Result};
pub use service::{Entity, Enum, Field, FieldType, Service};
