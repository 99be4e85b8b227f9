//! Listing, create, edit and delete handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use validator::Validate;

use crate::domain::entities::Link;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::dto::LinkForm;

/// Template for the listing page.
///
/// Renders `templates/links.html` with the add form followed by every link,
/// newest first.
#[derive(Template, WebTemplate)]
#[template(path = "links.html")]
pub struct LinksTemplate {
    pub links: Vec<Link>,
}

/// Template for the edit page, pre-filled with the current values.
#[derive(Template, WebTemplate)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub link: Link,
}

/// Renders all links.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 500 if the links cannot be loaded.
pub async fn index_handler(State(state): State<AppState>) -> Result<LinksTemplate, AppError> {
    let links = state
        .link_service
        .list_links()
        .await
        .map_err(|e| e.context("Error loading links"))?;

    Ok(LinksTemplate { links })
}

/// Creates a link from the form body and redirects to the listing.
///
/// # Endpoint
///
/// `POST /add`
///
/// # Errors
///
/// Returns 400 if a field is empty or too long, 500 on database errors.
pub async fn add_link_handler(
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    state
        .link_service
        .create_link(form.title(), &form.url)
        .await
        .map_err(|e| e.context("Error adding link"))?;

    Ok(Redirect::to("/"))
}

/// Deletes a link and redirects to the listing.
///
/// Deleting an id that does not exist still redirects.
///
/// # Endpoint
///
/// `GET /delete/{id}`
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    state
        .link_service
        .delete_link(id)
        .await
        .map_err(|e| e.context("Error deleting link"))?;

    Ok(Redirect::to("/"))
}

/// Renders the edit form for one link.
///
/// # Endpoint
///
/// `GET /edit/{id}`
///
/// # Errors
///
/// Returns 404 if the link does not exist, 500 on database errors.
pub async fn edit_form_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<EditTemplate, AppError> {
    let link = state
        .link_service
        .get_link(id)
        .await
        .map_err(|e| e.context("Error loading link"))?;

    Ok(EditTemplate { link })
}

/// Replaces title and url of a link and redirects to the listing.
///
/// An unknown id is a silent no-op.
///
/// # Endpoint
///
/// `POST /edit/{id}`
///
/// # Errors
///
/// Returns 400 on invalid fields, 500 on database errors.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Form(form): Form<LinkForm>,
) -> Result<Redirect, AppError> {
    form.validate()?;

    state
        .link_service
        .update_link(id, form.title(), &form.url)
        .await
        .map_err(|e| e.context("Error updating link"))?;

    Ok(Redirect::to("/"))
}
