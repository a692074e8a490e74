//! # Paystack Bridge
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging and tracing
//! - Build the Paystack gateway adapter
//! - Create the payment service
//! - Start the HTTP server

mod config;
mod telemetry;

use paystack_gateway::PaystackGateway;
use paystack_hex::{PaymentService, inbound::HttpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    let telemetry = telemetry::init(&config)?;

    tracing::info!("Starting Paystack bridge on port {}", config.port);
    tracing::info!("Using Paystack API at {}", config.gateway.base_url);
    if config.gateway.api_key.is_none() {
        tracing::warn!("PAYSTACK_API_KEY is not set; gateway calls will be answered with 401");
    }

    // Build the gateway adapter
    let gateway = PaystackGateway::new(config.gateway.clone())?;

    // Create the payment service
    let service = PaymentService::new(gateway, config.payments.clone());

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    telemetry.shutdown();
    Ok(())
}
