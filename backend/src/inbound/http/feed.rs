//! Feed API handler.

use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::Article;

use super::error::ErrorBody;
use super::session::{SessionCookie, issue_cookie};
use super::state::HttpState;

/// Article as rendered in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ArticleResponse {
    pub title: String,
    pub content: String,
    pub image: String,
    pub author_name: String,
    pub author_avatar: String,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title().to_owned(),
            content: article.content().to_owned(),
            image: article.image().to_owned(),
            author_name: article.author_name().to_owned(),
            author_avatar: article.author_avatar().to_owned(),
        }
    }
}

/// Every article. Requests without a live session get a guest session
/// cookie.
#[utoipa::path(
    get,
    path = "/feed",
    responses(
        (status = 200, description = "All articles", body = [ArticleResponse],
            headers(("Set-Cookie" = String, description = "Guest session cookie, when one was created"))),
        (status = 405, description = "Method not allowed", body = ErrorBody)
    ),
    tags = ["feed"],
    operation_id = "feed",
    security([])
)]
pub async fn feed(state: web::Data<HttpState>, cookie: SessionCookie) -> HttpResponse {
    let resolution = state.auth.resolve_session(cookie.value());
    let articles: Vec<ArticleResponse> = state
        .feed
        .articles()
        .iter()
        .map(ArticleResponse::from)
        .collect();

    let mut response = HttpResponse::Ok().json(articles);
    if resolution.is_new() {
        let cookie = issue_cookie(&state.cookies, resolution.session().id());
        if let Err(error) = response.add_cookie(&cookie) {
            warn!(%error, "failed to attach guest session cookie");
        }
    }
    response
}
