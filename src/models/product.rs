use crate::models::Review;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A catalog entry, persisted as one element of the catalog JSON array.
///
/// The descriptive fields hold whatever JSON value the client sent: they are required
/// to be present, their type is not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String, // generated on insert, never changes
    pub name: Value,
    pub description: Value,
    pub category: Value,
    pub price: Value,
    pub brand: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Product {
    pub fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category.as_str() == Some(category)
    }

    pub fn review_mut(&mut self, review_id: &str) -> Option<&mut Review> {
        self.reviews.iter_mut().find(|review| review.id == review_id)
    }
}

/// The whole persisted record set, in insertion order.
pub type Catalog = Vec<Product>;
