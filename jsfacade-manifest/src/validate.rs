//! Validation of script names against JavaScript identifier rules.

use std::ops::Range;

use miette::SourceSpan;
use toml::Spanned;

use crate::{Result, error::SourceContext};

/// Validation context: the source plus the path to the value being checked.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(&source);
/// ctx.push("lines[2]").validate_name(&call, "call")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
    path: Vec<String>,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self {
            source,
            path: Vec::new(),
        }
    }

    pub fn source(&self) -> &'a SourceContext {
        self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: impl Into<String>) -> Self {
        let mut path = self.path.clone();
        path.push(segment.into());
        Self {
            source: self.source,
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Describe `kind` with the current path, e.g. "call in 'lines[1]'".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// A validation error prefixed with the current path.
    pub fn error(&self, message: impl AsRef<str>, span: Option<Range<usize>>) -> Box<crate::Error> {
        let message = if self.path.is_empty() {
            message.as_ref().to_string()
        } else {
            format!("{}: {}", self.path_string(), message.as_ref())
        };
        self.source
            .validation_error(message, span.map(SourceSpan::from))
    }

    /// Validate a single identifier.
    pub fn validate_name(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        let span = Some(SourceSpan::from(name.span()));
        let value = name.get_ref();

        if is_reserved_word(value) {
            return Err(self
                .source
                .reserved_word_error(value, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(value) {
            return Err(self.source.invalid_identifier_error(
                value,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }

    /// Validate a dotted path such as `console.log`, segment by segment.
    ///
    /// Reserved words are accepted in dotted paths (`this.submit`).
    pub fn validate_path(&self, name: &Spanned<String>, kind: &str) -> Result<()> {
        let value = name.get_ref();
        if !value.contains('.') {
            return self.validate_name(name, kind);
        }

        for segment in value.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    value,
                    self.context_for(kind),
                    reason,
                    Some(SourceSpan::from(name.span())),
                ));
            }
        }

        Ok(())
    }
}

/// JavaScript reserved words that cannot name a function or parameter.
pub(crate) const JS_RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield",
];

pub(crate) fn is_reserved_word(name: &str) -> bool {
    JS_RESERVED_WORDS.contains(&name)
}

/// Returns `Some(reason)` when `name` is not a valid JavaScript identifier.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, '_' and '$'");
    }

    None
}
