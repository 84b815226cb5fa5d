use jsfacade_core::{Literal, Value};

/// An event binding resolved at render time into a bind statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Trigger {
    pub selector: String,
    pub event: String,
    /// Only fire when `e.which` equals this value.
    pub key: Option<Value>,
}

impl Trigger {
    pub fn new(selector: impl Into<String>, event: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            event: event.into(),
            key: None,
        }
    }

    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into()).filter(|k| !k.is_null());
        self
    }

    /// Render the bind statement calling `function`.
    pub(crate) fn bind(&self, function: &str) -> String {
        let call = format!("{}();", function);
        let body = match &self.key {
            Some(key) => format!(
                "if (e.which == {}) {{ {} }}",
                Literal::mixed(key.clone()),
                call
            ),
            None => call,
        };

        format!(
            "\n$({}).bind({}, function(e) {{ {} }} );\n",
            Literal::string(self.selector.as_str()),
            Literal::string(self.event.as_str()),
            body
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_without_key() {
        let trigger = Trigger::new("#btn", "click");
        assert_eq!(
            trigger.bind("save"),
            "\n$(\"#btn\").bind(\"click\", function(e) { save(); } );\n"
        );
    }

    #[test]
    fn test_bind_with_key() {
        let trigger = Trigger::new("input", "keypress").key(13);
        assert_eq!(
            trigger.bind("send"),
            "\n$(\"input\").bind(\"keypress\", function(e) { if (e.which == 13) { send(); } } );\n"
        );
    }

    #[test]
    fn test_null_key_is_no_key() {
        let trigger = Trigger::new("a", "click").key(Value::Null);
        assert_eq!(trigger.key, None);
    }
}
