use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the Tropicare application
///
/// Resolves configuration from the environment and runs the REST server
/// until shutdown.
///
/// # Environment Variables
/// - `TROPICARE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TROPICARE_DATA_DIR`: Directory for record storage (default: "/tropicare_data")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    api_rest::serve_from_env().await
}
