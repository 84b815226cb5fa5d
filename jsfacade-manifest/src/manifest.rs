//! Manifest types for script.toml files.

use serde::Deserialize;
use toml::Spanned;

/// Root manifest for script.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Decorators applied to the whole script
    #[serde(default)]
    pub script: ScriptConfig,

    /// Script lines in order
    #[serde(default)]
    pub lines: Vec<Line>,

    /// Event triggers calling the script's function
    #[serde(default)]
    pub triggers: Vec<TriggerConfig>,
}

/// The `[script]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    /// Wrap the script in a function with this name
    pub function: Option<Spanned<String>>,

    /// Wrap the script in a function with a generated name
    #[serde(default)]
    pub auto_function: bool,

    /// Function parameter names (defaults to `sender`)
    pub args: Option<Vec<Spanned<String>>>,

    /// Confirmation message shown before running
    pub confirm: Option<String>,

    /// Delay in milliseconds (0 = none)
    #[serde(default)]
    pub timeout: u64,

    /// Run on document ready
    #[serde(default)]
    pub ready: bool,
}

impl ScriptConfig {
    /// Whether the script is wrapped in a function.
    pub fn is_function(&self) -> bool {
        self.function.is_some() || self.auto_function
    }
}

/// One `[[lines]]` entry. Exactly one of `call`, `code`, `chain` or `sender`
/// is set; validation enforces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Line {
    /// Function to call, e.g. `alert` or `console.log`
    pub call: Option<Spanned<String>>,

    /// Arguments of `call`
    #[serde(default)]
    pub args: Vec<toml::Value>,

    /// Raw code line
    pub code: Option<String>,

    /// Selector of a call chain
    pub chain: Option<toml::Value>,

    /// Call chain against the event sender
    #[serde(default)]
    pub sender: bool,

    /// Calls of a chain
    #[serde(default)]
    pub calls: Vec<Call>,
}

/// The resolved shape of a [`Line`].
#[derive(Debug, Clone, Copy)]
pub enum LineKind<'a> {
    Call {
        name: &'a str,
        args: &'a [toml::Value],
    },
    Code(&'a str),
    Chain {
        /// `None` targets the sender
        selector: Option<&'a toml::Value>,
        calls: &'a [Call],
    },
}

impl Line {
    /// Names of the line kinds that are set.
    pub(crate) fn kinds(&self) -> Vec<&'static str> {
        let mut kinds = Vec::new();
        if self.call.is_some() {
            kinds.push("call");
        }
        if self.code.is_some() {
            kinds.push("code");
        }
        if self.chain.is_some() {
            kinds.push("chain");
        }
        if self.sender {
            kinds.push("sender");
        }
        kinds
    }

    /// The line's shape, `None` when it is ambiguous or empty.
    pub fn kind(&self) -> Option<LineKind<'_>> {
        if self.kinds().len() != 1 {
            return None;
        }

        if let Some(name) = &self.call {
            return Some(LineKind::Call {
                name: name.get_ref(),
                args: &self.args,
            });
        }
        if let Some(code) = &self.code {
            return Some(LineKind::Code(code));
        }
        Some(LineKind::Chain {
            selector: self.chain.as_ref(),
            calls: &self.calls,
        })
    }
}

/// One call of a chain.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Call {
    pub name: Spanned<String>,
    #[serde(default)]
    pub args: Vec<toml::Value>,
}

/// One `[[triggers]]` entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerConfig {
    pub selector: Spanned<String>,
    pub event: Spanned<String>,
    /// Only fire for this `e.which` key code
    pub key: Option<toml::Value>,
}
