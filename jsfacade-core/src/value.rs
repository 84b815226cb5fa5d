//! Host values accepted by the literal encoder.

use indexmap::IndexMap;

use crate::{Literal, ScriptSource};

/// A host value waiting to be encoded as a script literal.
///
/// Values are built through the `From` conversions and handed to
/// [`Literal`] for encoding. Maps keep insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An ordered list, rendered as an `Array(...)` literal.
    List(Vec<Value>),
    /// A keyed mapping, rendered as an object literal.
    Map(Vec<(Value, Value)>),
    /// An opaque object, rendered as its quoted type name.
    Object(String),
    /// Raw script code, rendered verbatim.
    Code(String),
    /// An already encoded literal, passed through untouched.
    Literal(Literal),
}

impl Value {
    /// Raw script code that is emitted without any escaping.
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    /// Raw code produced by a [`ScriptSource`]; nothing when it has none.
    pub fn source(source: &dyn ScriptSource) -> Self {
        Self::Code(source.script().unwrap_or_default())
    }

    /// An opaque object placeholder carrying a type name.
    pub fn object(type_name: impl Into<String>) -> Self {
        Self::Object(type_name.into())
    }

    /// An opaque object placeholder for the Rust type `T`.
    pub fn object_of<T: ?Sized>() -> Self {
        Self::Object(std::any::type_name::<T>().to_string())
    }

    /// Build a map value from key/value pairs, keeping their order.
    pub fn map<K, V, I>(pairs: I) -> Self
    where
        K: Into<Value>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Encode this value with type autodetection.
    pub fn into_literal(self) -> Literal {
        Literal::mixed(self)
    }

    /// Plain text form used when a value is coerced to a string.
    pub(crate) fn coerce_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) | Value::Code(s) | Value::Object(s) => s.clone(),
            Value::Literal(lit) => lit.text().to_string(),
            Value::List(_) | Value::Map(_) => Literal::mixed(self.clone()).into_text(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl From<Literal> for Value {
    fn from(value: Literal) -> Self {
        Value::Literal(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>> From<IndexMap<K, V>> for Value {
    fn from(value: IndexMap<K, V>) -> Self {
        Value::map(value)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into(),
            serde_json::Value::Object(fields) => Value::map(fields),
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Int(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => Value::String(dt.to_string()),
            toml::Value::Array(items) => items.into(),
            toml::Value::Table(fields) => Value::map(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;

    #[derive(Debug)]
    struct Redirect(Option<&'static str>);

    impl ScriptSource for Redirect {
        fn script(&self) -> Option<String> {
            self.0.map(|url| format!("window.location = {}", Literal::string(url)))
        }
    }

    #[test]
    fn test_source_encodes_as_code() {
        let value = Value::source(&Redirect(Some("home")));
        assert_eq!(value, Value::code("window.location = \"home\""));

        let lit = Literal::mixed(value);
        assert_eq!(lit.text(), "window.location = \"home\"");
        assert_eq!(lit.tag(), Tag::Code);
    }

    #[test]
    fn test_source_without_code_is_empty() {
        assert_eq!(Value::source(&Redirect(None)), Value::code(""));
    }

    #[test]
    fn test_option_maps_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }

    #[test]
    fn test_large_unsigned_falls_back_to_float() {
        assert_eq!(Value::from(u64::MAX), Value::Float(u64::MAX as f64));
        assert_eq!(Value::from(7u64), Value::Int(7));
    }

    #[test]
    fn test_json_conversion_keeps_shape() {
        let json = serde_json::json!({"a": [1, "x"], "b": null});
        assert_eq!(
            Value::from(json),
            Value::Map(vec![
                (
                    Value::from("a"),
                    Value::List(vec![Value::Int(1), Value::from("x")])
                ),
                (Value::from("b"), Value::Null),
            ])
        );
    }

    #[test]
    fn test_toml_conversion() {
        let table: toml::Table = toml::from_str("flag = true\nn = 1.5").unwrap();
        assert_eq!(
            Value::from(toml::Value::Table(table)),
            Value::Map(vec![
                (Value::from("flag"), Value::Bool(true)),
                (Value::from("n"), Value::Float(1.5)),
            ])
        );
    }

    #[test]
    fn test_object_of_uses_type_name() {
        assert_eq!(
            Value::object_of::<String>(),
            Value::Object("alloc::string::String".to_string())
        );
    }

    #[test]
    fn test_coerce_text() {
        assert_eq!(Value::Null.coerce_text(), "");
        assert_eq!(Value::Int(5).coerce_text(), "5");
        assert_eq!(Value::code("a()").coerce_text(), "a()");
    }
}
