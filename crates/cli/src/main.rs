//! Courier CLI
//!
//! Delivers raw RFC 5322 messages (`.eml` files) through a Courier delivery
//! method.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

/// Courier CLI — deliver `.eml` files through SendGrid.
#[derive(Parser, Debug)]
#[command(name = "courier", version, about)]
struct Cli {
    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Deliver a message.
    Send(commands::send::SendArgs),
    /// Print the SendGrid payload for a message without sending it.
    Translate(commands::translate::TranslateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => commands::send::run(&args, &cli.format).await,
        Command::Translate(args) => commands::translate::run(&args, &cli.format),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_send_flags() {
        let cli = Cli::try_parse_from([
            "courier",
            "--format",
            "json",
            "send",
            "welcome.eml",
            "--api-key",
            "SG.key",
            "--raise-delivery-errors",
            "--fail-on-server-errors",
        ])
        .unwrap();

        assert!(matches!(cli.format, OutputFormat::Json));
        let Command::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.file.to_str(), Some("welcome.eml"));
        assert_eq!(args.api_key.as_deref(), Some("SG.key"));
        assert!(args.raise_delivery_errors);
        assert!(args.fail_on_server_errors);
        assert!(!args.dry_run);
        assert_eq!(args.timeout_secs, 30);
    }

    #[test]
    fn parses_translate() {
        let cli = Cli::try_parse_from(["courier", "translate", "-"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Text));
        assert!(matches!(cli.command, Command::Translate(ref a) if a.file.to_str() == Some("-")));
    }
}
