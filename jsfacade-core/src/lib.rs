//! Core primitives for the jsfacade script builder.
//!
//! This crate turns host values into script literal text and provides the
//! small amount of shared state the builders need:
//!
//! - [`Value`] and [`Literal`]: the literal encoder
//! - [`Tag`]: the semantic type of an encoded literal
//! - [`ScriptSource`]: the "produces its own code" capability
//! - [`NameGenerator`]: unique function names for generated scripts
//! - [`Error`]: the structured error surfaced to callers

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod literal;
mod naming;
mod source;
mod value;

pub use error::{Error, Result};
pub use literal::{Literal, Tag, describe};
pub use naming::{FUNCTION_PREFIX, NameGenerator};
pub use source::ScriptSource;
pub use value::Value;
