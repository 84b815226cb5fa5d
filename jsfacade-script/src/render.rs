//! Decorators and text normalization applied by [`Script::render`](crate::Script::render).

use jsfacade_core::Literal;

use crate::Trigger;

pub(crate) fn cover_confirm(code: &str, text: &str) -> String {
    format!("if (confirm({})) {{\n{}}}\n", Literal::mixed(text), code)
}

pub(crate) fn cover_timeout(code: &str, milliseconds: u64) -> String {
    format!("setTimeout(function(){{{}\n}}, {});\n", code, milliseconds)
}

pub(crate) fn cover_document_ready(code: &str) -> String {
    format!("$(document).ready(function() {{\n{}}});", code)
}

pub(crate) fn cover_function(code: &str, name: &str, args: Option<&[String]>) -> String {
    let args = args.map_or_else(|| "sender".to_string(), |args| args.join(","));
    format!("\nfunction {}({}) {{\n{}}}\n", name, args, code)
}

/// A document-ready block binding every trigger to `function`.
pub(crate) fn trigger_block(triggers: &[Trigger], function: &str) -> String {
    let binds: String = triggers.iter().map(|t| t.bind(function)).collect();
    format!("$(document).ready(function() {{\n{}}});", binds)
}

pub(crate) fn wrap_tag(code: &str) -> String {
    format!("\n<script>\n{}\n</script>\n", code)
}

/// Normalize rendered code.
///
/// Doubled newlines collapse to one, then the last `;` and the last newline
/// in the text are removed, wherever they are. Text without a trailing `;`
/// loses an earlier one.
///
/// ```
/// use jsfacade_script::normalize;
///
/// assert_eq!(normalize("a();\n\nb();\n"), "a();\nb()");
/// assert_eq!(normalize("a();\nb()\n"), "a()\nb()");
/// ```
pub fn normalize(code: &str) -> String {
    let mut code = code.replace("\n\n", "\n").replace("\n\n\n", "\n");

    if let Some(pos) = code.rfind(';') {
        code.remove(pos);
    }
    if let Some(pos) = code.rfind('\n') {
        code.remove(pos);
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_strips_one_of_each() {
        assert_eq!(normalize("a();\n"), "a()");
        assert_eq!(normalize("a();\nb();\n"), "a();\nb()");
    }

    #[test]
    fn test_normalize_collapses_pairs_once() {
        // Four newlines collapse to two, which are not collapsed again.
        assert_eq!(normalize("a\n\n\n\nb;"), "a\nb");
        assert_eq!(normalize("a\n\n\nb;"), "a\nb");
    }

    #[test]
    fn test_normalize_without_trailing_semicolon() {
        assert_eq!(normalize("x = 1; y = 2\n"), "x = 1 y = 2");
    }

    #[test]
    fn test_cover_function_args() {
        assert_eq!(
            cover_function("go();\n", "f", None),
            "\nfunction f(sender) {\ngo();\n}\n"
        );
        let args = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            cover_function("", "f", Some(args.as_slice())),
            "\nfunction f(a,b) {\n}\n"
        );
        assert_eq!(cover_function("", "f", Some(&[])), "\nfunction f() {\n}\n");
    }

    #[test]
    fn test_cover_confirm_escapes_message() {
        assert_eq!(
            cover_confirm("go();\n", "Say \"yes\""),
            "if (confirm(\"Say \\\"yes\\\"\")) {\ngo();\n}\n"
        );
    }

    #[test]
    fn test_wrap_tag() {
        assert_eq!(wrap_tag("x"), "\n<script>\nx\n</script>\n");
    }
}
