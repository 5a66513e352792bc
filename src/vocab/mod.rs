//! Fixed Language Vocabulary
//!
//! The method and action names the language recognizes, defined declaratively
//! and loaded into a registry at startup.

pub mod registry;
pub mod schema;

pub use registry::Vocabulary;
pub use schema::{ActionDef, ActionKind, Attribute, MethodDef};
