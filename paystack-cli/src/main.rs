//! Paystack Bridge CLI
//!
//! Command-line interface for the Paystack bridge API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use paystack_client::{NewPayment, PaystackBridgeClient};

#[derive(Parser)]
#[command(name = "paystack-bridge")]
#[command(author, version, about = "Paystack bridge CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Paystack bridge API
    #[arg(long, env = "PAYSTACK_BRIDGE_URL", default_value = "http://localhost:8000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a payment and print the checkout details
    Pay {
        /// Customer email
        #[arg(long)]
        email: String,
        /// Amount in major units, e.g. 10.50
        #[arg(long)]
        amount: Decimal,
        /// Currency code (server default when omitted)
        #[arg(long)]
        currency: Option<String>,
        /// Redirect URL after checkout
        #[arg(long)]
        callback_url: Option<String>,
    },
    /// Verify a transaction by reference
    Status {
        /// Paystack transaction reference
        reference: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaystackBridgeClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let health = client.health().await?;
            println!("✓ API is up");
            if !health.paystack_api_key_configured {
                println!("! Paystack API key is not configured");
            }
        }

        Commands::Pay {
            email,
            amount,
            currency,
            callback_url,
        } => {
            let payment = NewPayment {
                email,
                amount,
                currency,
                callback_url,
            };
            let response = client.pay(&payment).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Status { reference } => {
            let response = client.status(&reference).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
