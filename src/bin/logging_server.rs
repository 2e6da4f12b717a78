//! Logging Server
//!
//! Serves the warn/error log demo endpoints and the user listing
//! endpoint backed by an in-memory repository.

use observability_demo::config::Config;
use observability_demo::repository::InMemoryUserRepository;
use observability_demo::server;
use observability_demo::services::users::UserService;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env(Config::DEFAULT_LOGGING_PORT);
    info!("Configuration loaded: {:?}", config);

    // Wire the user listing path: in-memory records behind the
    // data-access trait, composed into the service by hand.
    let repository = Arc::new(InMemoryUserRepository::with_sample_users());
    let service = Arc::new(UserService::new(repository));
    info!("Seeded in-memory user repository");

    let app = server::with_middleware(server::logging_routes(service));

    server::serve(app, &config).await
}
