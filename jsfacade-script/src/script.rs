//! Script fragment builder.

use std::{cell::OnceCell, fmt, io::Write, rc::Rc, sync::Arc};

use jsfacade_core::{Error, Literal, NameGenerator, Result, ScriptSource, Value};

use crate::{
    Chain, Fragment, Trigger,
    render::{
        cover_confirm, cover_document_ready, cover_function, cover_timeout, normalize,
        trigger_block, wrap_tag,
    },
};

/// Function wrapper configuration.
#[derive(Debug, Clone)]
struct Function {
    name: String,
    /// `None` renders the single parameter `sender`.
    args: Option<Vec<String>>,
}

/// Builder for a sequence of script lines with optional decorators.
///
/// Decorators always apply in the same order, whatever order they were
/// configured in: confirm, timeout, document ready, function, triggers.
///
/// # Example
///
/// ```
/// use jsfacade_script::Script;
///
/// let script = Script::new()
///     .make_function(Some("foo"))
///     .invoke("alert", ["hi"]);
///
/// assert_eq!(script.render(false), "\nfunction foo(sender) {\nalert(\"hi\")\n}");
/// assert_eq!(script.href().unwrap(), "href='javascript:foo(this);'");
/// ```
#[derive(Debug, Clone)]
pub struct Script {
    names: Arc<NameGenerator>,
    fragments: Vec<Fragment>,
    function: Option<Function>,
    /// Name assigned lazily when rendering needs one.
    auto_name: OnceCell<String>,
    confirm: Option<String>,
    timeout: u64,
    on_document_ready: bool,
    triggers: Vec<Trigger>,
    extension: Option<Rc<dyn ScriptSource>>,
}

impl Script {
    /// Create an empty script using the process-wide name generator.
    pub fn new() -> Self {
        Self::with_names(NameGenerator::global())
    }

    /// Create an empty script drawing function names from `names`.
    pub fn with_names(names: Arc<NameGenerator>) -> Self {
        names.bump();
        Self {
            names,
            fragments: Vec::new(),
            function: None,
            auto_name: OnceCell::new(),
            confirm: None,
            timeout: 0,
            on_document_ready: false,
            triggers: Vec::new(),
            extension: None,
        }
    }

    /// Append a call `name(args);`, each argument encoded as a literal.
    pub fn invoke<I, V>(mut self, name: &str, args: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let line = format!("{}({});", name, encode_args(args));
        self.fragments.push(Fragment::Text(line));
        self
    }

    /// Append a call without arguments.
    pub fn invoke_empty(self, name: &str) -> Self {
        self.invoke(name, std::iter::empty::<Value>())
    }

    /// Append a line: raw text, a literal, a nested script or a chain.
    pub fn add_code(mut self, fragment: impl Into<Fragment>) -> Self {
        self.fragments.push(fragment.into());
        self
    }

    /// Append a call chain against `selector`, built by `f`.
    pub fn chain<F>(self, selector: impl Into<Value>, f: F) -> Self
    where
        F: FnOnce(Chain) -> Chain,
    {
        self.add_code(f(Chain::new(selector)))
    }

    /// Append a call chain against the event sender element.
    pub fn sender<F>(self, f: F) -> Self
    where
        F: FnOnce(Chain) -> Chain,
    {
        self.add_code(f(Chain::sender()))
    }

    /// Attach an extension producing this script's own code, and append the
    /// line where that code goes.
    pub fn extend(mut self, source: Rc<dyn ScriptSource>) -> Self {
        self.extension = Some(source);
        self.add_code(Fragment::Own)
    }

    /// Register an event trigger calling this script's function.
    ///
    /// The script gets a generated function name at render time if it has
    /// none by then.
    pub fn add_trigger(
        mut self,
        selector: impl Into<String>,
        event: impl Into<String>,
        key: Option<Value>,
    ) -> Self {
        let trigger = Trigger::new(selector, event);
        let trigger = match key {
            Some(key) => trigger.key(key),
            None => trigger,
        };
        self.triggers.push(trigger);
        self
    }

    /// Wrap the script in a named function taking `sender`.
    ///
    /// `None` or an empty name generates a unique one.
    pub fn make_function(mut self, name: Option<&str>) -> Self {
        let name = self.resolve_name(name);
        self.function = Some(Function { name, args: None });
        self
    }

    /// Wrap the script in a named function with the given parameters.
    pub fn make_function_with_args<I, S>(mut self, name: Option<&str>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = self.resolve_name(name);
        let args = args.into_iter().map(Into::into).collect();
        self.function = Some(Function {
            name,
            args: Some(args),
        });
        self
    }

    /// Ask for confirmation before running. An empty message disables it.
    pub fn make_confirm(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref().trim();
        self.confirm = (!text.is_empty()).then(|| text.to_string());
        self
    }

    /// Delay execution. Zero disables the delay.
    pub fn make_timeout(mut self, milliseconds: u64) -> Self {
        self.timeout = milliseconds;
        self
    }

    /// Run when the document is ready.
    pub fn make_on_document_ready(mut self, value: bool) -> Self {
        self.on_document_ready = value;
        self
    }

    fn resolve_name(&self, name: Option<&str>) -> String {
        match name.filter(|n| !n.is_empty()) {
            Some(name) => name.to_string(),
            None => self.names.function_name(),
        }
    }

    /// The function name, configured or assigned lazily.
    pub fn function_name(&self) -> Option<&str> {
        self.function
            .as_ref()
            .map(|f| f.name.as_str())
            .or_else(|| self.auto_name.get().map(String::as_str))
    }

    fn function_args(&self) -> Option<&[String]> {
        self.function.as_ref().and_then(|f| f.args.as_deref())
    }

    fn ensure_function_name(&self) -> &str {
        match &self.function {
            Some(f) => &f.name,
            None => self.auto_name.get_or_init(|| self.names.function_name()),
        }
    }

    fn require_function_name(&self) -> Result<&str> {
        self.function_name().ok_or(Error::MissingFunctionName)
    }

    /// `javascript:<fn>(this);`
    pub fn url(&self) -> Result<String> {
        Ok(format!("javascript:{}(this);", self.require_function_name()?))
    }

    /// Name the function if needed, write the tagged script to `out` and
    /// return its URL.
    pub fn url_ready<W: Write>(&self, out: &mut W) -> Result<String> {
        self.ensure_function_name();
        self.dump(out)?;
        self.url()
    }

    /// `href='javascript:<fn>(this);'`
    pub fn href(&self) -> Result<String> {
        Ok(format!(
            "href='javascript:{}(this);'",
            self.require_function_name()?
        ))
    }

    /// An HTML event attribute, e.g. `ondblclick='<fn>(this);'`.
    pub fn event(&self, event: &str) -> Result<String> {
        Ok(format!("{}='{}(this);'", event, self.require_function_name()?))
    }

    /// A call to the function from other script code.
    pub fn caller(&self) -> Result<String> {
        Ok(format!("{}(this)", self.require_function_name()?))
    }

    /// The whole script as a `javascript:` URL.
    ///
    /// Only suitable for simple scripts; anything larger should be made a
    /// function and referenced through [`url`](Self::url).
    pub fn as_url(&self) -> String {
        format!("javascript:{}", self.render(false))
    }

    /// Write the tagged script to `out`.
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.render(true).as_bytes())?;
        Ok(())
    }

    /// Render the script, wrapped in a `<script>` tag when `as_tag` is set.
    pub fn render(&self, as_tag: bool) -> String {
        let function = if self.triggers.is_empty() {
            self.function_name()
        } else {
            Some(self.ensure_function_name())
        };

        tracing::debug!(
            fragments = self.fragments.len(),
            triggers = self.triggers.len(),
            function = ?function,
            "rendering script"
        );

        let mut code = String::new();
        for fragment in &self.fragments {
            code.push_str(&self.render_fragment(fragment));
            code.push('\n');
        }

        if let Some(text) = &self.confirm {
            code = cover_confirm(&code, text);
        }

        if self.timeout > 0 {
            code = cover_timeout(&code, self.timeout);
        }

        if self.on_document_ready {
            code = cover_document_ready(&code);
        }

        if let Some(name) = function {
            code = cover_function(&code, name, self.function_args());

            if !self.triggers.is_empty() {
                code.push_str(&trigger_block(&self.triggers, name));
            }
        }

        let code = normalize(&code);

        if as_tag { wrap_tag(&code) } else { code }
    }

    fn render_fragment(&self, fragment: &Fragment) -> String {
        match fragment {
            Fragment::Text(text) => text.clone(),
            Fragment::Literal(lit) => lit.text().to_string(),
            Fragment::Script(script) => script.render(false),
            Fragment::Chain(chain) => chain.render(false),
            Fragment::Own => match &self.extension {
                Some(source) => source.script().unwrap_or_default(),
                None => {
                    tracing::warn!("own-code fragment on a script without extension");
                    "/* Script does not implement 'ScriptSource' and cannot be rendered.*/\n"
                        .to_string()
                }
            },
        }
    }
}

impl Default for Script {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl ScriptSource for Script {
    fn script(&self) -> Option<String> {
        Some(self.render(false))
    }
}

impl From<&Script> for Value {
    fn from(script: &Script) -> Self {
        Value::Code(script.render(false))
    }
}

/// Encode call arguments, comma-joined without spaces.
pub(crate) fn encode_args<I, V>(args: I) -> String
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    args.into_iter()
        .map(|arg| Literal::mixed(arg).into_text())
        .collect::<Vec<_>>()
        .join(",")
}
