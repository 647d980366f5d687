//! HTTP inbound adapter exposing the REST endpoints.

pub mod app;
pub mod auth;
pub mod error;
pub mod feed;
pub mod health;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use crate::domain::ApiResult;
