//! Greeting endpoint handlers
//!
//! Stateless handlers returning fixed or interpolated text. `greet` and
//! `slow` hold the request for a fixed duration to stand in for real
//! downstream latency.

use axum::extract::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

/// Delay applied by `simulate_work`
const SIMULATED_WORK_DELAY: Duration = Duration::from_millis(50);
/// Delay applied by the slow endpoint
const SLOW_OPERATION_DELAY: Duration = Duration::from_millis(500);

/// GET / - Welcome message
pub async fn welcome() -> String {
    info!("Welcome endpoint called");
    "Welcome endpoint called".to_string()
}

/// GET /greet/:name - Greet the caller by name
///
/// The path segment is echoed back unmodified; no validation is applied.
pub async fn greet(Path(name): Path<String>) -> String {
    info!("Greeting user: {}", name);
    simulate_work().await;
    format!("Hello, {}!", name)
}

/// GET /slow - Endpoint backed by a deliberately slow operation
pub async fn slow() -> String {
    info!("Starting DB operation");
    sleep(SLOW_OPERATION_DELAY).await;
    info!("DB operation completed");
    "Completed!".to_string()
}

/// Suspend the current request briefly to emulate downstream latency.
/// Cancellation drops the future at the await point; no error surfaces.
async fn simulate_work() {
    sleep(SIMULATED_WORK_DELAY).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_welcome_returns_fixed_text() {
        assert_eq!(welcome().await, "Welcome endpoint called");
    }

    #[tokio::test]
    async fn test_greet_interpolates_name() {
        assert_eq!(greet(Path("World".to_string())).await, "Hello, World!");
    }

    #[tokio::test]
    async fn test_greet_passes_name_through_unmodified() {
        for name in ["", " ", "O'Brien", "名前", "a\tb", "<script>"] {
            let response = greet(Path(name.to_string())).await;
            assert_eq!(response, format!("Hello, {}!", name));
        }
    }

    #[tokio::test]
    async fn test_greet_waits_for_simulated_work() {
        let start = Instant::now();
        greet(Path("timing".to_string())).await;
        assert!(start.elapsed() >= SIMULATED_WORK_DELAY);
    }

    #[tokio::test]
    async fn test_slow_completes_after_delay() {
        let start = Instant::now();
        let response = slow().await;
        assert_eq!(response, "Completed!");
        assert!(start.elapsed() >= SLOW_OPERATION_DELAY);
    }
}
