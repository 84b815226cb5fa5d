//! Literal encoding of host values.

use std::fmt;

use crate::Value;

/// Semantic type of an encoded literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Null,
    String,
    Numeric,
    Boolean,
    /// Keyed mapping rendered as an object literal.
    AssociativeArray,
    /// Ordered list rendered as an `Array(...)` literal.
    IndexArray,
    /// Opaque object rendered as its quoted type name.
    Object,
    /// Raw script code.
    Code,
}

impl Tag {
    /// All tags in code order.
    pub const ALL: [Tag; 8] = [
        Tag::Null,
        Tag::String,
        Tag::Numeric,
        Tag::Boolean,
        Tag::AssociativeArray,
        Tag::IndexArray,
        Tag::Object,
        Tag::Code,
    ];

    /// Stable numeric code of this tag.
    pub const fn code(self) -> u16 {
        match self {
            Tag::Null => 1,
            Tag::String => 2,
            Tag::Numeric => 3,
            Tag::Boolean => 4,
            Tag::AssociativeArray => 100,
            Tag::IndexArray => 101,
            Tag::Object => 200,
            Tag::Code => 1000,
        }
    }

    pub fn from_code(code: u16) -> Option<Tag> {
        Self::ALL.into_iter().find(|tag| tag.code() == code)
    }

    /// Short description of the tag.
    ///
    /// Both array kinds describe as `array`.
    pub const fn describe(self) -> &'static str {
        match self {
            Tag::Null => "null",
            Tag::String => "string",
            Tag::Numeric => "numeric",
            Tag::Boolean => "boolean",
            Tag::AssociativeArray | Tag::IndexArray => "array",
            Tag::Object => "object",
            Tag::Code => "code",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Describe a raw tag code, `unknown` when no tag carries it.
pub fn describe(code: u16) -> &'static str {
    Tag::from_code(code).map_or("unknown", Tag::describe)
}

/// An encoded literal: script text plus the tag it was encoded as.
///
/// # Example
///
/// ```
/// use jsfacade_core::{Literal, Tag};
///
/// let lit = Literal::mixed(vec![1, 2]);
/// assert_eq!(lit.text(), "Array(1, 2)");
/// assert_eq!(lit.tag(), Tag::IndexArray);
///
/// let quoted = Literal::string("say \"hi\"");
/// assert_eq!(quoted.text(), r#""say \"hi\"""#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    text: String,
    tag: Tag,
}

impl Literal {
    /// Encode a value, optionally forcing how it is treated.
    ///
    /// `Tag::Code` emits the value verbatim, `Tag::String` always quotes it and
    /// `Tag::IndexArray` renders an `Array(...)` literal, wrapping a single
    /// value in a one-element list. Every other tag autodetects.
    pub fn encode(value: impl Into<Value>, forced: Option<Tag>) -> Self {
        let value = value.into();
        match forced {
            Some(Tag::Code) => Self::raw(value),
            Some(Tag::String) => Self::quoted(value),
            Some(Tag::IndexArray) if !value.is_null() => Self::array(value),
            _ => Self::detect(value),
        }
    }

    /// Encode a value with type autodetection.
    ///
    /// An existing literal passes through unchanged.
    pub fn mixed(value: impl Into<Value>) -> Self {
        Self::detect(value.into())
    }

    /// Encode a value as a quoted string literal.
    pub fn string(value: impl Into<Value>) -> Self {
        Self::quoted(value.into())
    }

    /// Encode a value as an `Array(...)` literal.
    pub fn index_array(value: impl Into<Value>) -> Self {
        Self::array(value.into())
    }

    /// Wrap raw script code.
    pub fn code(code: impl Into<String>) -> Self {
        Self {
            text: code.into(),
            tag: Tag::Code,
        }
    }

    /// The encoded script text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn describe(&self) -> &'static str {
        self.tag.describe()
    }

    fn new(text: String, tag: Tag) -> Self {
        Self { text, tag }
    }

    fn raw(value: Value) -> Self {
        Self::new(value.coerce_text(), Tag::Code)
    }

    fn quoted(value: Value) -> Self {
        let text = match value {
            Value::Literal(lit) => return lit,
            Value::Null => "null".to_string(),
            other => quote(&other.coerce_text()),
        };
        Self::new(text, Tag::String)
    }

    fn array(value: Value) -> Self {
        let items = match value {
            Value::List(items) => items,
            Value::Literal(lit) => return lit,
            other => vec![other],
        };
        Self::new(array_text(items), Tag::IndexArray)
    }

    fn detect(value: Value) -> Self {
        match value {
            Value::Null => Self::new("null".to_string(), Tag::Null),
            Value::Bool(b) => Self::new(b.to_string(), Tag::Boolean),
            Value::Int(i) => Self::new(i.to_string(), Tag::Numeric),
            Value::Float(f) => Self::new(float_text(f), Tag::Numeric),
            Value::String(s) => Self::new(quote(&s), Tag::String),
            Value::List(items) => Self::new(array_text(items), Tag::IndexArray),
            Value::Map(pairs) => Self::new(map_text(pairs), Tag::AssociativeArray),
            Value::Object(type_name) => Self::new(quote(&type_name), Tag::Object),
            Value::Code(code) => Self::new(code, Tag::Code),
            Value::Literal(lit) => lit,
        }
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        Literal::mixed(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// JSON string escaping, with `/` and every non-ASCII character escaped
/// as well so the text is safe inside a `<script>` element.
fn quote(s: &str) -> String {
    let json = serde_json::Value::String(s.to_string()).to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '/' => out.push_str("\\/"),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    out
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        f.to_string()
    }
}

fn array_text(items: Vec<Value>) -> String {
    let elements = items
        .into_iter()
        .map(|item| Literal::mixed(item).into_text())
        .collect::<Vec<_>>()
        .join(", ");
    format!("Array({})", elements)
}

fn map_text(pairs: Vec<(Value, Value)>) -> String {
    let elements = pairs
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}: {}",
                Literal::mixed(k).into_text(),
                Literal::mixed(v).into_text()
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", elements)
}
