use crate::db;
use crate::db::CatalogStore;
use actix_web::{delete, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Delete product.", skip(store))]
#[delete("/{product_id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();

    db::product::delete(store.get_ref(), &product_id)
        .await
        .map(|_| HttpResponse::NoContent().finish())
        .map_err(Error::from)
}
