//! On-demand table creation.

use axum::{extract::State, http::StatusCode};

use crate::error::AppError;
use crate::state::AppState;

/// Re-runs the startup table creation and reports the outcome as plain text.
///
/// # Endpoint
///
/// `GET /create-table`
///
/// # Errors
///
/// Unlike the page handlers, a failure here returns the driver error in the
/// body so the operator can see why the table could not be created.
pub async fn create_table_handler(
    State(state): State<AppState>,
) -> Result<&'static str, (StatusCode, String)> {
    match state.link_service.ensure_schema().await {
        Ok(()) => Ok("Table created or already existed"),
        Err(e) => {
            tracing::error!(error = %e, "Error creating table");
            let detail = match &e {
                AppError::Internal { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            Err((e.status_code(), format!("Error creating table: {detail}")))
        }
    }
}
