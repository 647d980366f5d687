//! Feed read model with one-time demo seeding.

use std::sync::Arc;

use parking_lot::Once;
use tracing::{info, warn};

use super::ports::ArticleRepository;
use super::{Article, UserId};

/// Title and body of each demo article, in publication order.
pub const DEMO_ARTICLES: [(&str, &str); 6] = [
    (
        "ИИ в 2025: Как нейросети меняют бизнес-процессы",
        "Искусственный интеллект в 2025 году стал неотъемлемой частью бизнеса...",
    ),
    (
        "Как российский стартап привлёк $10M на рынке SaaS",
        "Российский стартап CloudPeak разработал SaaS-платформу...",
    ),
    (
        "Тренды контент-маркетинга: Что работает в 2025 году",
        "Контент-маркетинг в 2025 году переживает новый виток...",
    ),
    (
        "Почему 80% стартапов терпят неудачу в первый год",
        "Запуск стартапа — это всегда риск...",
    ),
    (
        "Как мы увеличили конверсию на 30% с помощью UX",
        "Компания BrightPath переработала интерфейс...",
    ),
    (
        "Экспериментальный сверхдлинный заголовок статьи, в котором мы попробуем уместить сразу и суть, и интригу, и даже немного юмора, чтобы проверить, как фронтенд справится с рендерингом текста...",
        "Это тестовое содержимое статьи, которое специально сделано очень длинным, чтобы проверить работу фронтенда с большими объёмами текста... (длинный текст)",
    ),
];

/// Serves every article, publishing the demo set if the content store is
/// empty the first time the feed is read.
///
/// The bootstrap runs at most once per service: a store emptied later stays
/// empty.
pub struct FeedService {
    articles: Arc<dyn ArticleRepository>,
    bootstrap: Once,
}

impl FeedService {
    pub fn new(articles: Arc<dyn ArticleRepository>) -> Self {
        Self {
            articles,
            bootstrap: Once::new(),
        }
    }

    /// All live articles in store order.
    ///
    /// Concurrent first readers block until the bootstrap finishes.
    pub fn articles(&self) -> Vec<Article> {
        self.bootstrap.call_once(|| {
            if self.articles.get_all_articles().is_empty() {
                self.seed();
            }
        });
        self.articles.get_all_articles()
    }

    fn seed(&self) {
        let author_id = UserId::random();
        for (title, content) in DEMO_ARTICLES {
            if let Err(err) = self.articles.create_article(author_id, title, content) {
                warn!(%author_id, title, error = %err, "demo article rejected");
            }
        }
        info!(%author_id, count = DEMO_ARTICLES.len(), "seeded demo feed");
    }
}
