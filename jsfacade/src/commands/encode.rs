use clap::{Args, ValueEnum};
use eyre::{Context, Result};
use jsfacade_core::{Literal, Tag, Value};

#[derive(Args)]
pub struct EncodeCommand {
    /// JSON value to encode, e.g. '[1, "a"]'
    pub json: String,

    /// Force the literal type instead of detecting it
    #[arg(long = "as", value_enum)]
    pub kind: Option<LiteralKind>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LiteralKind {
    String,
    Array,
    Code,
}

impl From<LiteralKind> for Tag {
    fn from(kind: LiteralKind) -> Self {
        match kind {
            LiteralKind::String => Tag::String,
            LiteralKind::Array => Tag::IndexArray,
            LiteralKind::Code => Tag::Code,
        }
    }
}

impl EncodeCommand {
    /// Run the encode command
    pub fn run(&self) -> Result<()> {
        let literal = self.encode()?;
        println!("{}", literal.text());
        eprintln!("{} ({})", literal.describe(), literal.tag().code());
        Ok(())
    }

    fn encode(&self) -> Result<Literal> {
        let json: serde_json::Value =
            serde_json::from_str(&self.json).wrap_err("input is not valid JSON")?;
        Ok(Literal::encode(Value::from(json), self.kind.map(Tag::from)))
    }
}
