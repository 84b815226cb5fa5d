//! Lines accumulated by a script.

use jsfacade_core::Literal;

use crate::{Chain, Script};

/// One line of a [`Script`].
#[derive(Debug, Clone)]
pub enum Fragment {
    /// Raw text emitted as is.
    Text(String),
    /// An encoded literal, emitted as its text.
    Literal(Literal),
    /// A nested script, rendered without the tag wrapper.
    Script(Box<Script>),
    /// A call chain, rendered without the tag wrapper.
    Chain(Chain),
    /// The owning script's own code, produced by its extension.
    Own,
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment::Text(value.to_string())
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment::Text(value)
    }
}

impl From<Literal> for Fragment {
    fn from(value: Literal) -> Self {
        Fragment::Literal(value)
    }
}

impl From<Script> for Fragment {
    fn from(value: Script) -> Self {
        Fragment::Script(Box::new(value))
    }
}

impl From<Chain> for Fragment {
    fn from(value: Chain) -> Self {
        Fragment::Chain(value)
    }
}
