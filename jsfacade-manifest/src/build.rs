//! Turning a parsed manifest into a [`Script`].

use std::sync::Arc;

use jsfacade_script::{Chain, NameGenerator, Script};

use crate::{LineKind, Manifest, convert::to_value};

impl Manifest {
    /// Build the described script, naming functions from the process-wide
    /// generator.
    pub fn to_script(&self) -> Script {
        self.to_script_with(NameGenerator::global())
    }

    /// Build the described script with an explicit name generator.
    pub fn to_script_with(&self, names: Arc<NameGenerator>) -> Script {
        let mut script = Script::with_names(names);

        for line in &self.lines {
            script = match line.kind() {
                Some(LineKind::Call { name, args }) => script.invoke(name, args.iter().map(to_value)),
                Some(LineKind::Code(code)) => script.add_code(code),
                Some(LineKind::Chain { selector, calls }) => {
                    let mut chain = match selector {
                        Some(selector) => Chain::new(to_value(selector)),
                        None => Chain::sender(),
                    };
                    for call in calls {
                        chain = chain.invoke(call.name.get_ref(), call.args.iter().map(to_value));
                    }
                    script.add_code(chain)
                }
                None => script,
            };
        }

        let config = &self.script;
        if config.is_function() {
            let name = config.function.as_ref().map(|n| n.get_ref().as_str());
            script = match &config.args {
                Some(args) => script
                    .make_function_with_args(name, args.iter().map(|a| a.get_ref().clone())),
                None => script.make_function(name),
            };
        }
        if let Some(text) = &config.confirm {
            script = script.make_confirm(text);
        }
        script = script
            .make_timeout(config.timeout)
            .make_on_document_ready(config.ready);

        for trigger in &self.triggers {
            script = script.add_trigger(
                trigger.selector.get_ref(),
                trigger.event.get_ref(),
                trigger.key.as_ref().map(to_value),
            );
        }

        tracing::debug!(
            lines = self.lines.len(),
            triggers = self.triggers.len(),
            function = ?script.function_name(),
            "built script from manifest"
        );

        script
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn build(src: &str) -> String {
        Manifest::from_str(src)
            .unwrap()
            .to_script_with(Arc::new(NameGenerator::sequential(10)))
            .render(false)
    }

    #[test]
    fn test_call_line() {
        assert_eq!(
            build("[[lines]]\ncall = \"alert\"\nargs = [\"hi\", 1]\n"),
            "alert(\"hi\",1)"
        );
    }

    #[test]
    fn test_code_argument() {
        assert_eq!(
            build("[[lines]]\ncall = \"show\"\nargs = [{ \"$code\" = \"sender\" }]\n"),
            "show(sender)"
        );
    }

    #[test]
    fn test_sender_chain() {
        assert_eq!(
            build("[[lines]]\nsender = true\ncalls = [{ name = \"hide\" }]\n"),
            "$(sender).hide()"
        );
    }

    #[test]
    fn test_named_function() {
        assert_eq!(
            build("[script]\nfunction = \"go\"\n\n[[lines]]\ncode = \"run();\"\n"),
            "\nfunction go(sender) {\nrun()\n}"
        );
    }

    #[test]
    fn test_auto_function_uses_generator() {
        // 11 on construction, 12 for the name
        assert_eq!(
            build("[script]\nauto_function = true\nargs = []\n\n[[lines]]\ncode = \"run();\"\n"),
            "\nfunction ajs12() {\nrun()\n}"
        );
    }

    #[test]
    fn test_blank_confirm_is_ignored() {
        assert_eq!(
            build("[script]\nconfirm = \"  \"\n\n[[lines]]\ncode = \"run();\"\n"),
            "run()"
        );
    }
}
