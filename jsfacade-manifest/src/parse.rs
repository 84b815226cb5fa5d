//! Manifest parsing from strings.

use std::str::FromStr;

use miette::SourceSpan;

use crate::{
    Call, Error, Line, Manifest, Result, ScriptConfig, TriggerConfig,
    error::SourceContext,
    validate::{ParseContext, validate_identifier},
};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "script.toml")
    }
}

impl Manifest {
    /// Parse a script.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source.parse_error(e))?;
    validate_manifest(&manifest, &source)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, source: &SourceContext) -> Result<()> {
    let ctx = ParseContext::new(source);

    validate_script(&manifest.script, &ctx.push("script"))?;

    for (i, line) in manifest.lines.iter().enumerate() {
        validate_line(line, &ctx.push(format!("lines[{}]", i)))?;
    }

    for (i, trigger) in manifest.triggers.iter().enumerate() {
        validate_trigger(trigger, &ctx.push(format!("triggers[{}]", i)))?;
    }

    Ok(())
}

fn validate_script(script: &ScriptConfig, ctx: &ParseContext<'_>) -> Result<()> {
    if let Some(name) = &script.function {
        if script.auto_function {
            return Err(ctx.error(
                "set either 'function' or 'auto_function', not both",
                Some(name.span()),
            ));
        }
        ctx.validate_name(name, "function")?;
    }

    if let Some(args) = &script.args {
        if !script.is_function() {
            return Err(ctx.error(
                "'args' requires 'function' or 'auto_function'",
                args.first().map(|a| a.span()),
            ));
        }
        for arg in args {
            ctx.validate_name(arg, "parameter")?;
        }
    }

    Ok(())
}

fn validate_line(line: &Line, ctx: &ParseContext<'_>) -> Result<()> {
    let span = line.call.as_ref().map(|c| c.span());
    let kinds = line.kinds();

    match kinds.len() {
        0 => {
            return Err(ctx.error("line must set one of 'call', 'code', 'chain' or 'sender'", None));
        }
        1 => {}
        _ => {
            let names = kinds
                .iter()
                .map(|k| format!("'{}'", k))
                .collect::<Vec<_>>()
                .join(" and ");
            return Err(ctx.error(format!("line sets both {}", names), span));
        }
    }

    if let Some(name) = &line.call {
        ctx.validate_path(name, "call")?;
    } else if !line.args.is_empty() {
        return Err(ctx.error("'args' is only allowed with 'call'", None));
    }

    let is_chain = line.chain.is_some() || line.sender;
    if is_chain {
        if line.calls.is_empty() {
            return Err(ctx.error("a chain needs at least one entry in 'calls'", None));
        }
        for (i, call) in line.calls.iter().enumerate() {
            validate_method(call, &ctx.push(format!("calls[{}]", i)))?;
        }
    } else if !line.calls.is_empty() {
        return Err(ctx.error(
            "'calls' is only allowed with 'chain' or 'sender'",
            line.calls.first().map(|c| c.name.span()),
        ));
    }

    Ok(())
}

/// Method names may be reserved words (`.delete()`), but must be identifiers.
fn validate_method(call: &Call, ctx: &ParseContext<'_>) -> Result<()> {
    let name = call.name.get_ref();
    if let Some(reason) = validate_identifier(name) {
        return Err(ctx.source().invalid_identifier_error(
            name.as_str(),
            ctx.context_for("method"),
            reason,
            Some(SourceSpan::from(call.name.span())),
        ));
    }
    Ok(())
}

fn validate_trigger(trigger: &TriggerConfig, ctx: &ParseContext<'_>) -> Result<()> {
    if trigger.selector.get_ref().trim().is_empty() {
        return Err(ctx.error("trigger selector cannot be empty", Some(trigger.selector.span())));
    }
    if trigger.event.get_ref().trim().is_empty() {
        return Err(ctx.error("trigger event cannot be empty", Some(trigger.event.span())));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_err(src: &str) -> String {
        parse_manifest(src, "script.toml").unwrap_err().to_string()
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::from_str("").unwrap();
        assert!(manifest.lines.is_empty());
        assert!(!manifest.script.is_function());
    }

    #[test]
    fn test_parse_lines() {
        let manifest = Manifest::from_str(
            r##"
            [[lines]]
            call = "alert"
            args = ["hi"]

            [[lines]]
            code = "var x = 1;"

            [[lines]]
            chain = "#id"
            calls = [{ name = "focus" }]
            "##,
        )
        .unwrap();

        assert_eq!(manifest.lines.len(), 3);
        assert!(manifest.lines.iter().all(|l| l.kind().is_some()));
    }

    #[test]
    fn test_line_without_kind() {
        let err = parse_err("[[lines]]\nargs = [1]\n");
        assert_eq!(
            err,
            "lines[0]: line must set one of 'call', 'code', 'chain' or 'sender'"
        );
    }

    #[test]
    fn test_line_with_two_kinds() {
        let err = parse_err("[[lines]]\ncall = \"a\"\ncode = \"b\"\n");
        assert_eq!(err, "lines[0]: line sets both 'call' and 'code'");
    }

    #[test]
    fn test_chain_without_calls() {
        let err = parse_err("[[lines]]\nsender = true\n");
        assert_eq!(err, "lines[0]: a chain needs at least one entry in 'calls'");
    }

    #[test]
    fn test_calls_outside_chain() {
        let err = parse_err("[[lines]]\ncode = \"x\"\ncalls = [{ name = \"a\" }]\n");
        assert_eq!(
            err,
            "lines[0]: 'calls' is only allowed with 'chain' or 'sender'"
        );
    }

    #[test]
    fn test_reserved_function_name() {
        let err = parse_manifest("[script]\nfunction = \"delete\"\n", "script.toml").unwrap_err();
        assert!(matches!(*err, Error::ReservedWord { .. }));
    }

    #[test]
    fn test_invalid_call_name() {
        let err = parse_manifest("[[lines]]\ncall = \"do-it\"\n", "script.toml").unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "do-it");
                assert_eq!(context, "call in 'lines[0]'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dotted_call_allows_reserved_member() {
        Manifest::from_str("[[lines]]\ncall = \"this.delete\"\n").unwrap();
        Manifest::from_str("[[lines]]\ncall = \"console.log\"\n").unwrap();
    }

    #[test]
    fn test_method_may_be_reserved_word() {
        Manifest::from_str("[[lines]]\nchain = \"#x\"\ncalls = [{ name = \"delete\" }]\n").unwrap();
    }

    #[test]
    fn test_function_and_auto_function() {
        let err = parse_err("[script]\nfunction = \"f\"\nauto_function = true\n");
        assert_eq!(
            err,
            "script: set either 'function' or 'auto_function', not both"
        );
    }

    #[test]
    fn test_args_require_function() {
        let err = parse_err("[script]\nargs = [\"a\"]\n");
        assert_eq!(err, "script: 'args' requires 'function' or 'auto_function'");
    }

    #[test]
    fn test_empty_trigger_event() {
        let err = parse_err("[[triggers]]\nselector = \"#a\"\nevent = \" \"\n");
        assert_eq!(err, "triggers[0]: trigger event cannot be empty");
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = parse_manifest("[script]\ndelay = 5\n", "script.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = parse_manifest("[script\n", "script.toml").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other}"),
        }
    }
}
