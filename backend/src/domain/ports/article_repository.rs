//! Port abstraction for the content store.

use crate::domain::{Article, ArticleId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by content store adapters.
    pub enum ArticleStoreError {
        /// The author already has a live article with this title.
        DuplicateTitle as Conflict => "article with this title already exists for this author",
        /// No live article matches the identifier.
        NotFound as NotFound => "article not found",
    }
}

/// Content store: owns articles and enforces per-author title uniqueness.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleRepository: Send + Sync {
    /// Publish an article stamped with the current time.
    fn create_article(
        &self,
        author_id: UserId,
        title: &str,
        content: &str,
    ) -> Result<Article, ArticleStoreError>;

    /// Fetch an article by identifier.
    fn get_article_by_id(&self, id: &ArticleId) -> Result<Article, ArticleStoreError>;

    /// Every live article by `author_id`; empty when there are none.
    fn get_articles_by_author_id(&self, author_id: &UserId) -> Vec<Article>;

    /// Every live article in insertion order. A delete moves the last
    /// article into the freed slot, so order is not stable across deletes.
    fn get_all_articles(&self) -> Vec<Article>;

    /// Remove an article.
    fn delete_article(&self, id: &ArticleId) -> Result<(), ArticleStoreError>;
}
