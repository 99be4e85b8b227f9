//! Form body for `POST /add` and `POST /edit/{id}`.

use serde::Deserialize;
use validator::Validate;

/// URL-encoded link form.
///
/// Missing fields deserialize as empty strings so the service can reject
/// them with a validation error instead of the extractor failing first.
/// Older bookmarklets post the title as `titulo`; it is read as its own
/// field so a body carrying both names still deserializes.
#[derive(Debug, Deserialize, Validate)]
pub struct LinkForm {
    #[serde(default)]
    #[validate(length(max = 500, message = "Title is too long"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Title is too long"))]
    pub titulo: Option<String>,

    #[serde(default)]
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: String,
}

impl LinkForm {
    /// The submitted title: `title` when it has content, otherwise `titulo`.
    pub fn title(&self) -> &str {
        match &self.titulo {
            Some(legacy) if self.title.trim().is_empty() => legacy,
            _ => &self.title,
        }
    }
}
