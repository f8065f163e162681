use crate::db;
use crate::db::CatalogStore;
use actix_web::{delete, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Delete review.", skip(store))]
#[delete("/{product_id}/reviews/{review_id}")]
pub async fn delete_handler(
    path: web::Path<(String, String)>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id, review_id) = path.into_inner();

    db::review::delete(store.get_ref(), &product_id, &review_id)
        .await
        .map(|reviews| HttpResponse::Ok().json(reviews))
        .map_err(Error::from)
}
