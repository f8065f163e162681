use crate::db;
use crate::db::CatalogStore;
use crate::forms;
use actix_web::{put, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Update product.", skip(store))]
#[put("/{product_id}")]
pub async fn update_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::ProductPatch>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    let patch = form.into_inner();
    if let Err(err) = patch.check() {
        tracing::debug!("Invalid product patch received: {:?}", err);
        return Err(err.into());
    }

    db::product::update(store.get_ref(), &product_id, patch)
        .await
        .map(|product| {
            tracing::info!("Product {} updated", product.id);
            HttpResponse::Ok().json(product)
        })
        .map_err(Error::from)
}
