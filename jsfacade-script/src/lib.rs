//! Fluent builder for client-side script fragments.
//!
//! A [`Script`] accumulates lines of code (function calls, raw text, encoded
//! literals, nested scripts and call chains) and renders them with optional
//! decorators: confirmation dialog, delayed execution, document-ready
//! handler, named function and event triggers.
//!
//! A [`Chain`] accumulates dot-joined calls against one selector.
//!
//! # Example
//!
//! ```
//! use jsfacade_script::Script;
//!
//! let script = Script::new()
//!     .invoke("alert", ["Hello world"])
//!     .chain("#id", |c| c.invoke("css", ["color", "#00ff00"]));
//!
//! assert_eq!(
//!     script.render(false),
//!     "alert(\"Hello world\")\n$(\"#id\").css(\"color\",\"#00ff00\")"
//! );
//! ```

mod chain;
mod fragment;
mod render;
mod script;
mod trigger;

pub use chain::Chain;
pub use fragment::Fragment;
pub use jsfacade_core::{Error, Literal, NameGenerator, Result, ScriptSource, Tag, Value};
pub use render::normalize;
pub use script::Script;
pub use trigger::Trigger;
