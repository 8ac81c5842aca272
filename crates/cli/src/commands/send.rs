use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use courier_delivery::{DynDeliveryMethod, LogDelivery};
use courier_sendgrid::{FailurePolicy, SendGridConfig, SendGridDelivery};

use crate::OutputFormat;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Message file (`-` for stdin).
    pub file: PathBuf,
    /// SendGrid API key.
    #[arg(long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// SendGrid API base URL.
    #[arg(
        long,
        env = "SENDGRID_API_BASE_URL",
        default_value = "https://api.sendgrid.com"
    )]
    pub api_base_url: String,
    /// Fail instead of warning when SendGrid rejects the message.
    #[arg(long)]
    pub raise_delivery_errors: bool,
    /// Treat 5xx responses as failed deliveries too.
    #[arg(long)]
    pub fail_on_server_errors: bool,
    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Log the message instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: &SendArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let message = super::load_message(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;

    let delivery: Box<dyn DynDeliveryMethod> = if args.dry_run {
        Box::new(LogDelivery::new("dry-run"))
    } else {
        let api_key = args
            .api_key
            .clone()
            .context("an API key is required (--api-key or SENDGRID_API_KEY)")?;
        let policy = if args.fail_on_server_errors {
            FailurePolicy::AllErrors
        } else {
            FailurePolicy::ClientErrors
        };
        let config = SendGridConfig::new(api_key)
            .with_api_base_url(&args.api_base_url)
            .with_raise_delivery_errors(args.raise_delivery_errors)
            .with_failure_policy(policy)
            .with_timeout(Duration::from_secs(args.timeout_secs));
        Box::new(SendGridDelivery::new(config)?)
    };

    let receipt = delivery.deliver(&message).await?;

    if let Some(ref warning) = receipt.warning {
        eprintln!("warning: {warning}");
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&receipt)?);
        }
        OutputFormat::Text => {
            println!(
                "{} -> {} {}",
                delivery.name(),
                receipt.status_code,
                receipt.message_id.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
