//! Link lifecycle service: validation in front of the store.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkInput};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Service for creating, reading, replacing and deleting links.
///
/// Validates input before any statement runs. Updates and deletes that match
/// no row succeed silently; only [`LinkService::get_link`] reports a missing
/// id.
#[derive(Clone)]
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates the link table if needed. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        self.repository.ensure_schema().await?;
        tracing::debug!("Link table ensured");
        Ok(())
    }

    /// Checks that the store answers.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list().await
    }

    /// Creates a link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `title` or `url` is empty or
    /// whitespace only.
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_link(&self, title: &str, url: &str) -> Result<Link, AppError> {
        let input = validate(title, url)?;
        let link = self.repository.create(input).await?;

        tracing::info!(id = link.id, "Link created");
        Ok(link)
    }

    /// Retrieves a link by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, id: i64) -> Result<Link, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))
    }

    /// Replaces title and url of a link, keeping its id.
    ///
    /// An unknown id is not an error; nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on empty fields.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_link(&self, id: i64, title: &str, url: &str) -> Result<(), AppError> {
        let input = validate(title, url)?;
        let affected = self.repository.update(id, input).await?;

        if affected == 0 {
            tracing::debug!(id, "Update matched no link");
        } else {
            tracing::info!(id, "Link updated");
        }

        Ok(())
    }

    /// Deletes a link.
    ///
    /// An unknown id is not an error; nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, id: i64) -> Result<(), AppError> {
        let affected = self.repository.delete(id).await?;

        if affected == 0 {
            tracing::debug!(id, "Delete matched no link");
        } else {
            tracing::info!(id, "Link deleted");
        }

        Ok(())
    }
}

fn validate(title: &str, url: &str) -> Result<LinkInput, AppError> {
    LinkInput::new(title, url).map_err(|field| AppError::bad_request(field.to_string()))
}
