//! Feed article model.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserId;

/// Author display name stamped on every article.
pub const ARTICLE_AUTHOR_NAME: &str = "Алексей Владимиров";
/// Author avatar stamped on every article.
pub const ARTICLE_AUTHOR_AVATAR: &str = super::user::DEFAULT_AVATAR_URL;
/// Cover image stamped on every article.
pub const ARTICLE_COVER_IMAGE: &str = "https://st4.depositphotos.com/36740986/38337/i/450/depositphotos_383375990-stock-photo-collection-hundred-dollar-banknotes-female.jpg";

/// Article identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Published article.
///
/// ## Invariants
/// - `(author_id, title)` is unique across live articles.
/// - The display fields are fixed at creation and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author_id: UserId,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    image: String,
    author_name: String,
    author_avatar: String,
}

impl Article {
    /// Build an article stamped with the fixed display fields.
    pub fn new(
        id: ArticleId,
        author_id: UserId,
        title: impl Into<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            title: title.into(),
            content: content.into(),
            created_at,
            image: ARTICLE_COVER_IMAGE.to_owned(),
            author_name: ARTICLE_AUTHOR_NAME.to_owned(),
            author_avatar: ARTICLE_AUTHOR_AVATAR.to_owned(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author_id(&self) -> UserId {
        self.author_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    pub fn author_avatar(&self) -> &str {
        &self.author_avatar
    }
}
