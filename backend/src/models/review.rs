//! Review board records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id_type!(uuid::Uuid, ReviewId);

impl ReviewId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

/// A stored review. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub text: String,
    /// Author display name at the time of writing
    pub username: String,
    pub email: String,
    /// Author identifier; only this identity may delete the review
    pub uid: String,
    pub created_at: DateTime<Utc>,
}

/// A review as handed to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReview {
    pub text: String,
    pub username: String,
    pub email: String,
    pub uid: String,
}
