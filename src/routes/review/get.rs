use crate::db;
use crate::db::CatalogStore;
use actix_web::{get, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Get reviews of a product.", skip(store))]
#[get("/{product_id}/reviews")]
pub async fn list_handler(
    path: web::Path<(String,)>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    db::review::fetch_all(store.get_ref(), &product_id)
        .await
        .map(|reviews| HttpResponse::Ok().json(reviews))
        .map_err(Error::from)
}
