//! Greeting Server
//!
//! Serves the welcome, greet, and slow demo endpoints with request
//! tracing. The slow paths hold each request for a fixed duration to
//! make latency visible in the logs.

use observability_demo::config::Config;
use observability_demo::server;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env(Config::DEFAULT_GREETING_PORT);
    info!("Configuration loaded: {:?}", config);

    let app = server::with_middleware(server::greeting_routes());

    server::serve(app, &config).await
}
