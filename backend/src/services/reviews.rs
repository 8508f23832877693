//! Review board: submit, list and delete reviews.
//!
//! The caller identity is passed in explicitly; only a review's author may
//! delete it. Ordering and consistency come from the repository.

use std::sync::Arc;
use tracing::{info, warn};

use crate::db::ReviewRepository;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Identity, NewReview, Review, ReviewId};

/// Display name used when the author has neither a name nor an email.
pub const ANONYMOUS: &str = "Anonymous";
/// Email shown when the author has none.
pub const NO_EMAIL: &str = "No email";

#[derive(Clone)]
pub struct ReviewBoard {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewBoard {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn ReviewRepository> {
        &self.repository
    }

    /// Store a review written by `author`.
    pub async fn submit(&self, author: &Identity, text: &str) -> ServiceResult<Review> {
        if text.trim().is_empty() {
            return Err(ServiceError::invalid_input("Review text must not be empty."));
        }

        let review = NewReview {
            text: text.to_string(),
            username: author
                .display_name
                .clone()
                .or_else(|| author.email.clone())
                .unwrap_or_else(|| ANONYMOUS.to_string()),
            email: author.email.clone().unwrap_or_else(|| NO_EMAIL.to_string()),
            uid: author.uid.clone(),
        };

        let stored = self.repository.insert_review(review).await?;
        info!(review_id = %stored.id, uid = %stored.uid, "review submitted");
        Ok(stored)
    }

    /// All reviews, newest first.
    pub async fn list(&self) -> ServiceResult<Vec<Review>> {
        Ok(self.repository.list_reviews().await?)
    }

    /// Delete `id` on behalf of `caller`, who must be its author.
    pub async fn delete(&self, caller: &Identity, id: ReviewId) -> ServiceResult<()> {
        let review = self.repository.get_review(id).await?;
        if review.uid != caller.uid {
            warn!(review_id = %id, caller = %caller.uid, "refused to delete another user's review");
            return Err(ServiceError::Forbidden(
                "Only the author can delete this review.".to_string(),
            ));
        }

        self.repository.delete_review(id).await?;
        info!(review_id = %id, uid = %caller.uid, "review deleted");
        Ok(())
    }
}
