//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local stores for users, sessions, and articles.
//!
//! Adapters are thin: they own storage and locking and enforce the uniqueness
//! invariants of their records. They contain no request-level logic.

pub mod memory;
