//! Selector-scoped call chains.

use std::{rc::Rc, sync::Arc};

use jsfacade_core::{Literal, NameGenerator, ScriptSource, Value};

use crate::{
    Script,
    render::{normalize, wrap_tag},
    script::encode_args,
};

/// Builder for a dot-joined call chain against one selector.
///
/// Renders as `$(<selector>).<call1>.<call2>;`. The selector is encoded
/// when the chain is rendered.
///
/// # Example
///
/// ```
/// use jsfacade_script::{Chain, ScriptSource};
///
/// let chain = Chain::new("#id")
///     .invoke("attr", ["value", "Hello world"])
///     .invoke("css", ["color", "#ff0000"])
///     .invoke_empty("focus");
///
/// assert_eq!(
///     chain.script().unwrap(),
///     r##"$("#id").attr("value","Hello world").css("color","#ff0000").focus();"##
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Chain {
    selector: Value,
    calls: Vec<String>,
}

impl Chain {
    /// Create a chain against `selector`, e.g. `"#id"` or `"input"`.
    pub fn new(selector: impl Into<Value>) -> Self {
        Self {
            selector: selector.into(),
            calls: Vec::new(),
        }
    }

    /// Create a chain against the event sender element of a function.
    pub fn sender() -> Self {
        Self::new(Value::code("sender"))
    }

    /// Append a call `name(args)`, each argument encoded as a literal.
    pub fn invoke<I, V>(mut self, name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.calls.push(format!("{}({})", name, encode_args(args)));
        self
    }

    /// Append a call without arguments.
    pub fn invoke_empty(self, name: &str) -> Self {
        self.invoke(name, std::iter::empty::<Value>())
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Turn the chain into a script whose first line is the chain, so
    /// decorators can be applied to it.
    pub fn into_script(self) -> Script {
        self.into_script_with(NameGenerator::global())
    }

    /// Like [`into_script`](Self::into_script), naming functions from `names`.
    pub fn into_script_with(self, names: Arc<NameGenerator>) -> Script {
        Script::with_names(names).extend(Rc::new(self))
    }

    /// Render the chain standalone, normalized like a one-line script.
    pub fn render(&self, as_tag: bool) -> String {
        let code = normalize(&format!("{}\n", self.script().unwrap_or_default()));
        if as_tag { wrap_tag(&code) } else { code }
    }
}

impl ScriptSource for Chain {
    /// `None` when no call was made.
    fn script(&self) -> Option<String> {
        if self.calls.is_empty() {
            return None;
        }

        Some(format!(
            "$({}).{};",
            Literal::mixed(self.selector.clone()),
            self.calls.join(".")
        ))
    }
}

impl From<&Chain> for Value {
    fn from(chain: &Chain) -> Self {
        Value::Code(chain.render(false))
    }
}
