use crate::db;
use crate::db::CatalogStore;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use actix_web::{post, web, Error, HttpResponse, Result};

#[tracing::instrument(name = "Add review.", skip(store))]
#[post("/{product_id}/reviews")]
pub async fn add_handler(
    path: web::Path<(String,)>,
    form: web::Json<forms::ReviewForm>,
    store: web::Data<CatalogStore>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    let form = form.into_inner();
    if let Err(err) = form.check() {
        tracing::debug!("Invalid review received: {:?}", err);
        return Err(err.into());
    }

    db::review::insert(store.get_ref(), &product_id, form)
        .await
        .map(|review| {
            JsonResponse::<models::Review>::build()
                .set_id(review.id.clone())
                .set_item(review)
                .created("Review added")
        })
        .map_err(Error::from)
}
