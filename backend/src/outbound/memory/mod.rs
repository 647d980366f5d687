//! In-memory adapters for the identity, session, and content store ports.
//!
//! Each store owns its records behind a `parking_lot::RwLock`; nothing is
//! persisted and every read hands out a copy.

mod arena;
mod article_store;
mod session_store;
mod user_store;

pub use article_store::InMemoryArticleStore;
pub use session_store::InMemorySessionStore;
pub use user_store::InMemoryUserStore;
