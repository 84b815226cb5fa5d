use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use jsfacade_manifest::ScriptToml;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to script.toml (defaults to ./script.toml)
    #[arg(short, long, default_value = jsfacade_manifest::DEFAULT_FILENAME)]
    pub config: PathBuf,

    /// Print the bare script without the <script> wrapper
    #[arg(long)]
    pub no_tag: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let script_toml = ScriptToml::open(&self.config).unwrap_or_exit();
        let script = script_toml.manifest().to_script();
        let code = script.render(!self.no_tag);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &code)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), bytes = code.len(), "wrote script");
            }
            None => println!("{}", code),
        }

        Ok(())
    }
}
