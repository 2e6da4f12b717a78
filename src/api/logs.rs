//! Log-level demo handlers
//!
//! Endpoints that exist to produce warn- and error-level log lines on
//! demand, echoing the logged text back to the caller.

use tracing::{error, warn};

/// GET / - Emit a warn-level sample log line
pub async fn welcome() -> String {
    warn!("sample warn log");
    "sample warn log".to_string()
}

/// GET /log-error - Emit an error-level sample log line
pub async fn log_error() -> String {
    error!("sample error log");
    "sample error log".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_returns_logged_text() {
        assert_eq!(welcome().await, "sample warn log");
    }

    #[tokio::test]
    async fn test_log_error_returns_logged_text() {
        assert_eq!(log_error().await, "sample error log");
    }
}
