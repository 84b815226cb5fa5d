use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use jsfacade_manifest::{LineKind, ScriptToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to script.toml (defaults to ./script.toml)
    #[arg(short, long, default_value = jsfacade_manifest::DEFAULT_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let script_toml = ScriptToml::open(&self.config).unwrap_or_exit();
        let manifest = script_toml.manifest();
        let config = &manifest.script;

        println!("✓ {} is valid\n", self.config.display());

        match (&config.function, config.auto_function) {
            (Some(name), _) => println!("  function {}", name.get_ref()),
            (None, true) => println!("  function <generated>"),
            (None, false) if !manifest.triggers.is_empty() => {
                println!("  function <generated for triggers>")
            }
            (None, false) => {}
        }
        if let Some(text) = config.confirm.as_deref().filter(|t| !t.trim().is_empty()) {
            println!("  confirm {:?}", text.trim());
        }
        if config.timeout > 0 {
            println!("  timeout {}ms", config.timeout);
        }
        if config.ready {
            println!("  on document ready");
        }

        let count = manifest.lines.len();
        println!("\n  {} line{}:", count, if count == 1 { "" } else { "s" });
        for line in &manifest.lines {
            match line.kind() {
                Some(LineKind::Call { name, args }) => {
                    println!("    call {} ({} args)", name, args.len())
                }
                Some(LineKind::Code(_)) => println!("    code"),
                Some(LineKind::Chain { selector: None, calls }) => {
                    println!("    sender chain ({} calls)", calls.len())
                }
                Some(LineKind::Chain { calls, .. }) => {
                    println!("    chain ({} calls)", calls.len())
                }
                None => {}
            }
        }

        if !manifest.triggers.is_empty() {
            let count = manifest.triggers.len();
            println!("\n  {} trigger{}:", count, if count == 1 { "" } else { "s" });
            for trigger in &manifest.triggers {
                println!(
                    "    {} on {}",
                    trigger.event.get_ref(),
                    trigger.selector.get_ref()
                );
            }
        }

        Ok(())
    }
}
