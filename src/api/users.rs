//! User listing handler
//!
//! Delegates to the user service and returns its result verbatim.

use crate::error::AppError;
use crate::repository::User;
use crate::services::users::UserService;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::info;

/// GET /users - List every stored user
pub async fn users(State(service): State<Arc<UserService>>) -> Result<Json<Vec<User>>, AppError> {
    info!("Getting all users information");
    let users = service.get_all_users().await?;
    Ok(Json(users))
}
