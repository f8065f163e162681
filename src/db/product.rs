//! Product records on top of [`CatalogStore`]. Every write is one
//! load → change → save cycle. Input forms are trusted: field validation happens
//! in the request handlers before these functions are called.

use crate::db::{CatalogStore, Outcome};
use crate::errors::CatalogError;
use crate::forms::{ProductForm, ProductPatch};
use crate::helpers::ImageStore;
use crate::models;

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn find_mut<'a>(
    catalog: &'a mut models::Catalog,
    id: &str,
) -> Result<&'a mut models::Product, CatalogError> {
    catalog
        .iter_mut()
        .find(|product| product.id == id)
        .ok_or_else(|| CatalogError::product_not_found(id))
}

pub async fn fetch_all(
    store: &CatalogStore,
    category: Option<&str>,
) -> Result<Vec<models::Product>, CatalogError> {
    let catalog = store.load().await?;
    let products = match category {
        Some(category) => catalog
            .into_iter()
            .filter(|product| product.in_category(category))
            .collect(),
        None => catalog,
    };

    Ok(products)
}

pub async fn fetch(store: &CatalogStore, id: &str) -> Result<models::Product, CatalogError> {
    tracing::info!("Fetch product {}", id);
    store
        .load()
        .await?
        .into_iter()
        .find(|product| product.id == id)
        .ok_or_else(|| CatalogError::product_not_found(id))
}

pub async fn insert(store: &CatalogStore, form: ProductForm) -> Result<String, CatalogError> {
    let id = store
        .mutate(move |catalog| {
            let mut id = new_id();
            while catalog.iter().any(|product| product.id == id) {
                id = new_id();
            }
            catalog.push(form.into_product(id.clone()));
            Ok(id)
        })
        .await?;
    tracing::info!("New product {} has been saved", id);

    Ok(id)
}

pub async fn update(
    store: &CatalogStore,
    id: &str,
    patch: ProductPatch,
) -> Result<models::Product, CatalogError> {
    store
        .mutate(|catalog| {
            let product = find_mut(catalog, id)?;
            patch.update(product);
            product.touch();
            Ok(product.clone())
        })
        .await
}

/// Removes the product. Deleting an id that is not in the catalog succeeds and
/// leaves the file untouched.
pub async fn delete(store: &CatalogStore, id: &str) -> Result<(), CatalogError> {
    tracing::info!("Delete product {}", id);
    store
        .apply(|catalog| {
            let before = catalog.len();
            catalog.retain(|product| product.id != id);
            if catalog.len() == before {
                tracing::debug!("Product {} was not in the catalog", id);
                return Ok(Outcome::Unchanged(()));
            }
            Ok(Outcome::Changed(()))
        })
        .await
}

/// Stores the image file, then points the product's `imageUrl` at it.
pub async fn attach_image(
    store: &CatalogStore,
    images: &ImageStore,
    id: &str,
    filename: &str,
    bytes: &[u8],
    url_for: impl FnOnce(&str) -> String,
) -> Result<models::Product, CatalogError> {
    // no orphan files for unknown products
    fetch(store, id).await?;

    let stored_as = images.save(filename, bytes).await?;
    let image_url = url_for(&stored_as);

    store
        .mutate(|catalog| {
            let product = find_mut(catalog, id)?;
            product.image_url = Some(image_url);
            product.touch();
            Ok(product.clone())
        })
        .await
}
