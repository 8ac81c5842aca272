use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use courier_sendgrid::MessageTranslator;

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Message file (`-` for stdin).
    pub file: PathBuf,
}

pub fn run(args: &TranslateArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let message = super::load_message(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let payload = MessageTranslator.translate(&message)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&payload)?),
        OutputFormat::Text => println!("{}", serde_json::to_string_pretty(&payload)?),
    }

    Ok(())
}
