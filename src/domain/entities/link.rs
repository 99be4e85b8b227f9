//! Link entity representing one bookmarked resource.

/// A stored bookmark.
///
/// `id` is assigned by the store on creation and never changes or gets
/// reused; `title` and `url` are replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub title: String,
    pub url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, title: String, url: String) -> Self {
        Self { id, title, url }
    }
}

/// Input data for creating or replacing a link.
///
/// Constructed through [`LinkInput::new`], which trims both fields and
/// rejects empty values, so a `LinkInput` always carries non-empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkInput {
    title: String,
    url: String,
}

/// Which required field of a [`LinkInput`] was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MissingField {
    #[error("Title is required")]
    Title,
    #[error("URL is required")]
    Url,
}

impl LinkInput {
    pub fn new(title: &str, url: &str) -> Result<Self, MissingField> {
        let title = title.trim();
        let url = url.trim();

        if title.is_empty() {
            return Err(MissingField::Title);
        }
        if url.is_empty() {
            return Err(MissingField::Url);
        }

        Ok(Self {
            title: title.to_string(),
            url: url.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
