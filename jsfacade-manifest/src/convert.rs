//! Conversion of manifest values into script values.

use jsfacade_script::Value;

/// Key of a table holding raw code instead of a map.
pub const CODE_KEY: &str = "$code";

/// Convert a TOML value into a script [`Value`].
///
/// A table whose only entry is a string under [`CODE_KEY`] becomes raw
/// code. Other tables become maps, arrays become lists and datetimes become
/// strings.
pub fn to_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::Array(items) => Value::List(items.iter().map(to_value).collect()),
        toml::Value::Table(table) => {
            if let Some(code) = raw_code(table) {
                return Value::code(code);
            }
            Value::Map(
                table
                    .iter()
                    .map(|(k, v)| (Value::String(k.clone()), to_value(v)))
                    .collect(),
            )
        }
        scalar => Value::from(scalar.clone()),
    }
}

fn raw_code(table: &toml::Table) -> Option<&str> {
    if table.len() != 1 {
        return None;
    }
    table.get(CODE_KEY).and_then(toml::Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> toml::Value {
        let table: toml::Table = toml::from_str(src).unwrap();
        table["v"].clone()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(to_value(&parse("v = 'x'")), Value::from("x"));
        assert_eq!(to_value(&parse("v = 3")), Value::Int(3));
        assert_eq!(to_value(&parse("v = 1.5")), Value::Float(1.5));
        assert_eq!(to_value(&parse("v = true")), Value::Bool(true));
    }

    #[test]
    fn test_code_table() {
        assert_eq!(
            to_value(&parse("v = { \"$code\" = \"sender\" }")),
            Value::code("sender")
        );
    }

    #[test]
    fn test_code_key_with_other_entries_is_a_map() {
        let value = to_value(&parse("v = { \"$code\" = \"x\", a = 1 }"));
        assert!(matches!(value, Value::Map(ref pairs) if pairs.len() == 2));
    }

    #[test]
    fn test_nested_code_in_array() {
        let value = to_value(&parse("v = [1, { \"$code\" = \"id\" }]"));
        assert_eq!(value, Value::List(vec![Value::Int(1), Value::code("id")]));
    }

    #[test]
    fn test_datetime_becomes_string() {
        let value = to_value(&parse("v = 1979-05-27"));
        assert_eq!(value, Value::from("1979-05-27"));
    }
}
