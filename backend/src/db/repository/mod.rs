//! Repository traits for review storage.
//!
//! The document store behind the review board is external; this trait is
//! the seam it plugs into. `LocalRepository` implements it in memory.

pub mod error;

use async_trait::async_trait;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use crate::models::{NewReview, Review, ReviewId};

/// Storage operations for reviews.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Store a review, assigning its id and creation timestamp.
    ///
    /// # Returns
    /// * `Ok(Review)` - The stored review with server-assigned fields
    /// * `Err(RepositoryError)` - If the store rejects the write
    async fn insert_review(&self, review: NewReview) -> RepositoryResult<Review>;

    /// All reviews ordered by `created_at`, newest first.
    async fn list_reviews(&self) -> RepositoryResult<Vec<Review>>;

    /// Fetch one review.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no review has this id
    async fn get_review(&self, id: ReviewId) -> RepositoryResult<Review>;

    /// Delete one review. Authorization is the caller's concern.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If no review has this id
    async fn delete_review(&self, id: ReviewId) -> RepositoryResult<()>;
}
