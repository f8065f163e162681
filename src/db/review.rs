//! Reviews live inside their product record, so every review write rewrites the
//! owning product and refreshes its `updatedAt`.

use crate::db::product::{find_mut, new_id};
use crate::db::{self, CatalogStore, Outcome};
use crate::errors::CatalogError;
use crate::forms::{ReviewForm, ReviewPatch};
use crate::models;

pub async fn fetch_all(
    store: &CatalogStore,
    product_id: &str,
) -> Result<Vec<models::Review>, CatalogError> {
    db::product::fetch(store, product_id)
        .await
        .map(|product| product.reviews)
}

pub async fn insert(
    store: &CatalogStore,
    product_id: &str,
    form: ReviewForm,
) -> Result<models::Review, CatalogError> {
    let review = store
        .mutate(move |catalog| {
            let product = find_mut(catalog, product_id)?;
            let mut id = new_id();
            while product.reviews.iter().any(|review| review.id == id) {
                id = new_id();
            }
            let review = form.into_review(id, product_id);
            product.reviews.push(review.clone());
            product.touch();
            Ok(review)
        })
        .await?;
    tracing::info!("Review {} added to product {}", review.id, product_id);

    Ok(review)
}

/// Merges `patch` into one review and returns the product's full review list.
pub async fn update(
    store: &CatalogStore,
    product_id: &str,
    review_id: &str,
    patch: ReviewPatch,
) -> Result<Vec<models::Review>, CatalogError> {
    store
        .mutate(move |catalog| {
            let product = find_mut(catalog, product_id)?;
            let review = product
                .review_mut(review_id)
                .ok_or_else(|| CatalogError::review_not_found(product_id, review_id))?;
            patch.update(review);
            review.updated_at = Some(chrono::Utc::now());
            product.touch();
            Ok(product.reviews.clone())
        })
        .await
}

/// Removes one review and returns what is left. An unknown review id is not an error
/// and changes nothing, an unknown product is.
pub async fn delete(
    store: &CatalogStore,
    product_id: &str,
    review_id: &str,
) -> Result<Vec<models::Review>, CatalogError> {
    store
        .apply(move |catalog| {
            let product = find_mut(catalog, product_id)?;
            let before = product.reviews.len();
            product.reviews.retain(|review| review.id != review_id);
            if product.reviews.len() == before {
                return Ok(Outcome::Unchanged(product.reviews.clone()));
            }
            product.touch();
            Ok(Outcome::Changed(product.reviews.clone()))
        })
        .await
}
