//! In-memory review store.
//!
//! Holds everything behind one `RwLock`, so readers always see a consistent
//! snapshot. Ordering is by `created_at`; reviews written within the same
//! clock tick keep their insertion order.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, ReviewRepository};
use crate::models::{NewReview, Review, ReviewId};

#[derive(Debug, Clone)]
struct StoredReview {
    seq: u64,
    review: Review,
}

#[derive(Debug, Default)]
struct LocalData {
    reviews: HashMap<ReviewId, StoredReview>,
    next_seq: u64,
}

#[derive(Debug, Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reviews.
    pub fn len(&self) -> usize {
        self.data.read().reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn missing(operation: &str, id: ReviewId) -> RepositoryError {
        RepositoryError::not_found_with_context(
            format!("Review {} not found", id),
            ErrorContext::new(operation)
                .with_entity("review")
                .with_entity_id(id),
        )
    }
}

#[async_trait]
impl ReviewRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn insert_review(&self, review: NewReview) -> RepositoryResult<Review> {
        if review.uid.trim().is_empty() {
            return Err(RepositoryError::validation_with_context(
                "Review must carry an author uid",
                ErrorContext::new("insert_review").with_entity("review"),
            ));
        }

        let stored = Review {
            id: ReviewId::generate(),
            text: review.text,
            username: review.username,
            email: review.email,
            uid: review.uid,
            created_at: Utc::now(),
        };

        let mut data = self.data.write();
        let seq = data.next_seq;
        data.next_seq += 1;
        data.reviews.insert(
            stored.id,
            StoredReview {
                seq,
                review: stored.clone(),
            },
        );
        Ok(stored)
    }

    async fn list_reviews(&self) -> RepositoryResult<Vec<Review>> {
        let data = self.data.read();
        let mut entries: Vec<&StoredReview> = data.reviews.values().collect();
        entries.sort_by(|a, b| {
            b.review
                .created_at
                .cmp(&a.review.created_at)
                .then_with(|| b.seq.cmp(&a.seq))
        });
        Ok(entries.into_iter().map(|e| e.review.clone()).collect())
    }

    async fn get_review(&self, id: ReviewId) -> RepositoryResult<Review> {
        self.data
            .read()
            .reviews
            .get(&id)
            .map(|e| e.review.clone())
            .ok_or_else(|| Self::missing("get_review", id))
    }

    async fn delete_review(&self, id: ReviewId) -> RepositoryResult<()> {
        self.data
            .write()
            .reviews
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Self::missing("delete_review", id))
    }
}
