use crate::db;
use crate::db::CatalogStore;
use crate::forms;
use actix_web::{put, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Update review.", skip(store))]
#[put("/{product_id}/reviews/{review_id}")]
pub async fn update_handler(
    path: web::Path<(String, String)>,
    form: web::Json<forms::ReviewPatch>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id, review_id) = path.into_inner();
    let patch = form.into_inner();
    patch.check()?;

    db::review::update(store.get_ref(), &product_id, &review_id, patch)
        .await
        .map(|reviews| HttpResponse::Ok().json(reviews))
        .map_err(Error::from)
}
