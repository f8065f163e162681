use crate::db;
use crate::db::CatalogStore;
use actix_web::{get, web, Error, HttpResponse, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[tracing::instrument(
    name = "Get all products.",
    skip(store),
    fields(category = query.category.as_deref().unwrap_or_default())
)]
#[get("")]
pub async fn list_handler(
    query: web::Query<ListQuery>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    db::product::fetch_all(store.get_ref(), query.category.as_deref())
        .await
        .map(|products| HttpResponse::Ok().json(products))
        .map_err(Error::from)
}

#[tracing::instrument(name = "Get product.", skip(store))]
#[get("/{product_id}")]
pub async fn item_handler(
    path: web::Path<(String,)>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    db::product::fetch(store.get_ref(), &product_id)
        .await
        .map(|product| HttpResponse::Ok().json(product))
        .map_err(Error::from)
}
