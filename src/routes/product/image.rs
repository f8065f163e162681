use crate::configuration::Settings;
use crate::db;
use crate::db::CatalogStore;
use crate::errors::{CatalogError, FieldError};
use crate::helpers::ImageStore;
use actix_multipart::Multipart;
use actix_web::{post, web, Error, HttpResponse, Result};
use futures_util::StreamExt;

/// Multipart field carrying the image file.
const IMAGE_FIELD: &str = "imageUrl";
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

async fn read_upload(mut payload: Multipart) -> Result<Upload> {
    let mut upload = None;

    while let Some(field) = payload.next().await {
        let mut field = field?;
        let disposition = field.content_disposition();
        let is_image = disposition.get_name() == Some(IMAGE_FIELD);
        let filename = disposition.get_filename().unwrap_or_default().to_string();

        let mut bytes = vec![];
        while let Some(chunk) = field.next().await {
            let chunk = chunk?;
            if is_image {
                if bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                    return Err(invalid("Image exceeds the 10 MiB upload limit").into());
                }
                bytes.extend_from_slice(&chunk);
            }
        }

        if is_image && upload.is_none() {
            upload = Some(Upload { filename, bytes });
        }
    }

    upload.ok_or_else(|| invalid("imageUrl file field is missing").into())
}

fn invalid(message: &str) -> CatalogError {
    CatalogError::ValidationFailed(vec![FieldError::new(IMAGE_FIELD, message)])
}

#[tracing::instrument(name = "Upload product image.", skip(payload, store, images, settings))]
#[post("/{product_id}/uploadImageUrl")]
pub async fn upload_image_handler(
    path: web::Path<(String,)>,
    payload: Multipart,
    store: web::Data<CatalogStore>,
    images: web::Data<ImageStore>,
    settings: web::Data<Settings>,
) -> Result<HttpResponse> {
    let (product_id,) = path.into_inner();
    let upload = read_upload(payload).await?;
    tracing::info!(
        "Received image {} ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    db::product::attach_image(
        store.get_ref(),
        images.get_ref(),
        &product_id,
        &upload.filename,
        &upload.bytes,
        |filename| settings.storage.image_url(filename),
    )
    .await
    .map(|product| HttpResponse::Ok().json(product))
    .map_err(Error::from)
}
