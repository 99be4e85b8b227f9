//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    add_link_handler, create_table_handler, delete_link_handler, edit_form_handler, index_handler,
    update_link_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes.
///
/// # Endpoints
///
/// - `GET  /`             - Listing page with the add form
/// - `POST /add`          - Create a link, redirect to `/`
/// - `GET  /delete/{id}`  - Delete a link, redirect to `/`
/// - `GET  /edit/{id}`    - Edit form
/// - `POST /edit/{id}`    - Replace title and url, redirect to `/`
/// - `GET  /create-table` - Ensure the link table exists
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/add", post(add_link_handler))
        .route("/delete/{id}", get(delete_link_handler))
        .route("/edit/{id}", get(edit_form_handler).post(update_link_handler))
        .route("/create-table", get(create_table_handler))
}
