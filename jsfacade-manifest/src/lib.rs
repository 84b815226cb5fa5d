//! TOML description of a client-side script.
//!
//! A `script.toml` lists the lines of a script, its decorators and its
//! event triggers. [`Manifest::to_script`] turns it into a
//! [`Script`](jsfacade_script::Script).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod build;
mod convert;
mod error;
mod file;
mod manifest;
mod parse;
mod validate;

pub use convert::{CODE_KEY, to_value};
pub use error::{Error, Result, SourceContext};
pub use file::{DEFAULT_FILENAME, ScriptToml};
pub use manifest::{Call, Line, LineKind, Manifest, ScriptConfig, TriggerConfig};
pub use parse::parse_manifest;
