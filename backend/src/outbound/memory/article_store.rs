//! In-memory content store.

use std::collections::HashSet;
use std::sync::Arc;

use mockable::Clock;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::ports::{ArticleRepository, ArticleStoreError};
use crate::domain::{Article, ArticleId, UserId};

use super::arena::Arena;

#[derive(Debug, Default)]
struct ArticleState {
    articles: Arena<ArticleId, Article>,
    titles: HashSet<(UserId, String)>,
}

/// `RwLock`-guarded article store with per-author title uniqueness.
///
/// Creation timestamps come from the injected clock.
pub struct InMemoryArticleStore {
    state: RwLock<ArticleState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryArticleStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(ArticleState::default()),
            clock,
        }
    }
}

impl ArticleRepository for InMemoryArticleStore {
    fn create_article(
        &self,
        author_id: UserId,
        title: &str,
        content: &str,
    ) -> Result<Article, ArticleStoreError> {
        let mut state = self.state.write();
        let key = (author_id, title.to_owned());
        if state.titles.contains(&key) {
            return Err(ArticleStoreError::duplicate_title());
        }

        let mut id = ArticleId::random();
        while state.articles.get(&id).is_some() {
            id = ArticleId::random();
        }
        let article = Article::new(id, author_id, title, content, self.clock.utc());
        state.articles.insert(id, article.clone());
        state.titles.insert(key);
        debug!(article_id = %id, %author_id, "article stored");
        Ok(article)
    }

    fn get_article_by_id(&self, id: &ArticleId) -> Result<Article, ArticleStoreError> {
        self.state
            .read()
            .articles
            .get(id)
            .cloned()
            .ok_or_else(ArticleStoreError::not_found)
    }

    fn get_articles_by_author_id(&self, author_id: &UserId) -> Vec<Article> {
        self.state
            .read()
            .articles
            .values()
            .filter(|article| article.author_id() == *author_id)
            .cloned()
            .collect()
    }

    fn get_all_articles(&self) -> Vec<Article> {
        self.state.read().articles.values().cloned().collect()
    }

    fn delete_article(&self, id: &ArticleId) -> Result<(), ArticleStoreError> {
        let mut state = self.state.write();
        let removed = state
            .articles
            .remove(id)
            .ok_or_else(ArticleStoreError::not_found)?;
        state
            .titles
            .remove(&(removed.author_id(), removed.title().to_owned()));
        Ok(())
    }
}
