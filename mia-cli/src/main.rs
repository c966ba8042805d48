//! MIA CLI
//!
//! Command-line interface for the Victoriabank MIA QR-payment API.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mia_api::{ClientConfig, MiaApiRequest};
use mia_types::{DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, Params, Payload};

#[derive(Parser)]
#[command(name = "mia")]
#[command(author, version, about = "Victoriabank MIA QR-payment CLI", long_about = None)]
struct Cli {
    /// Base URL of the MIA API
    #[arg(long, env = "MIA_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Base URL of the demo-pay sandbox
    #[arg(long, env = "MIA_DEMO_PAY_URL", default_value = DEFAULT_DEMO_PAY_URL)]
    demo_pay_url: String,

    /// Bearer access token
    #[arg(long, env = "MIA_ACCESS_TOKEN", hide_env_values = true, default_value = "")]
    token: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "MIA_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// QR code operations
    Qr {
        #[command(subcommand)]
        action: QrCommands,
    },
    /// QR extension operations
    Extension {
        #[command(subcommand)]
        action: ExtensionCommands,
    },
    /// Reconciliation operations
    Transactions {
        #[command(subcommand)]
        action: TransactionCommands,
    },
    /// Payment operations
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
}

#[derive(Subcommand)]
enum QrCommands {
    /// Register a new payee-presented QR code
    Create {
        /// JSON object with `header` and `extension`
        #[arg(long)]
        data: String,
        /// Query parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Get QR status with its last extensions and payments
    Status {
        /// QR header UUID
        id: String,
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
    /// Cancel a QR code and its active extension
    Cancel {
        /// QR header UUID
        id: String,
    },
}

#[derive(Subcommand)]
enum ExtensionCommands {
    /// Register a new extension for a HYBR or STAT QR code
    Create {
        /// QR header UUID
        id: String,
        /// JSON object describing the extension
        #[arg(long)]
        data: Option<String>,
    },
    /// Cancel the active extension of a hybrid QR code
    Cancel {
        /// QR header UUID
        id: String,
    },
    /// Get extension status and its last payments
    Status {
        /// QR extension UUID
        id: String,
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
enum TransactionCommands {
    /// List transactions for reconciliation
    List {
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

#[derive(Subcommand)]
enum PaymentCommands {
    /// Simulate a payment against a QR header (sandbox only)
    TestPay {
        /// JSON object with `qrHeaderUUID`
        #[arg(long)]
        data: String,
    },
    /// Get payment details
    Details {
        /// Payment ID
        id: String,
    },
    /// Refund a payment
    Refund {
        /// Payment ID
        id: String,
        /// JSON object with refund details
        #[arg(long)]
        data: Option<String>,
    },
    /// List payments
    List {
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got `{s}`"))
}

fn parse_payload(s: &str) -> Result<Payload> {
    match serde_json::from_str::<Value>(s).context("--data is not valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("--data must be a JSON object"),
    }
}

fn parse_optional_payload(s: Option<&str>) -> Result<Option<Payload>> {
    s.map(parse_payload).transpose()
}

fn to_params(pairs: Vec<(String, String)>) -> Params {
    pairs
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,mia_api=info,mia_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::default()
        .with_base_url(&cli.base_url)
        .with_demo_pay_url(&cli.demo_pay_url);
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    tracing::debug!("Using MIA API at {}", config.base_url);

    let api = MiaApiRequest::with_config(config);
    let token = cli.token.as_str();

    let result = match cli.command {
        Commands::Qr { action } => match action {
            QrCommands::Create { data, params } => {
                let data = parse_payload(&data)?;
                let params = to_params(params);
                api.qr_create(Some(&data), Some(&params), token).await?
            }
            QrCommands::Status { id, params } => {
                let params = to_params(params);
                api.qr_status(&id, Some(&params), token).await?
            }
            QrCommands::Cancel { id } => api.qr_cancel(&id, token).await?,
        },

        Commands::Extension { action } => match action {
            ExtensionCommands::Create { id, data } => {
                let data = parse_optional_payload(data.as_deref())?;
                api.qr_create_extension(&id, data.as_ref(), token).await?
            }
            ExtensionCommands::Cancel { id } => api.qr_cancel_extension(&id, token).await?,
            ExtensionCommands::Status { id, params } => {
                let params = to_params(params);
                api.qr_extension_status(&id, Some(&params), token).await?
            }
        },

        Commands::Transactions { action } => match action {
            TransactionCommands::List { params } => {
                let params = to_params(params);
                api.transactions_list(Some(&params), token).await?
            }
        },

        Commands::Payment { action } => match action {
            PaymentCommands::TestPay { data } => {
                let data = parse_payload(&data)?;
                api.test_pay(Some(&data), token).await?
            }
            PaymentCommands::Details { id } => api.payment_details(&id, token).await?,
            PaymentCommands::Refund { id, data } => {
                let data = parse_optional_payload(data.as_deref())?;
                api.payment_refund(&id, data.as_ref(), token).await?
            }
            PaymentCommands::List { params } => {
                let params = to_params(params);
                api.payment_list(Some(&params), token).await?
            }
        },
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("dateFrom=2024-01-01").unwrap(),
            ("dateFrom".to_string(), "2024-01-01".to_string())
        );
        assert_eq!(
            parse_key_val("filter=a=b").unwrap(),
            ("filter".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
    }

    #[test]
    fn test_parse_payload_requires_object() {
        let data = parse_payload(r#"{"qrHeaderUUID":"x"}"#).unwrap();
        assert_eq!(data["qrHeaderUUID"], "x");
        assert!(parse_payload("[1,2]").is_err());
        assert!(parse_payload("{oops").is_err());
        assert!(parse_optional_payload(None).unwrap().is_none());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let cli = Cli::try_parse_from([
            "mia",
            "--token",
            "tok",
            "qr",
            "status",
            "abc-123",
            "--param",
            "nbOfExt=2",
        ])
        .unwrap();
        assert_eq!(cli.token, "tok");
        match cli.command {
            Commands::Qr {
                action: QrCommands::Status { id, params },
            } => {
                assert_eq!(id, "abc-123");
                assert_eq!(params, vec![("nbOfExt".to_string(), "2".to_string())]);
            }
            _ => panic!("unexpected command"),
        }
    }
}
