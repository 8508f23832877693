//! Review storage.
//!
//! The service layer talks to storage only through the [`ReviewRepository`]
//! trait, so the in-memory store can be swapped for a document database
//! without touching the handlers.
//!
//! ```text
//! HTTP handlers ──▶ services::ReviewBoard ──▶ dyn ReviewRepository
//!                                                  │
//!                                         repositories::LocalRepository
//! ```

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, ReviewRepository};
