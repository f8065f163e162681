use crate::db;
use crate::db::CatalogStore;
use crate::forms;
use actix_web::{post, web, Error, HttpResponse, Result};
use serde_json::json;

#[tracing::instrument(name = "Add product.", skip(store))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::ProductForm>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let form = form.into_inner();
    if let Err(err) = form.check() {
        tracing::debug!("Invalid product received: {:?}", err);
        return Err(err.into());
    }

    db::product::insert(store.get_ref(), form)
        .await
        .map(|id| HttpResponse::Created().json(json!({ "id": id })))
        .map_err(Error::from)
}
