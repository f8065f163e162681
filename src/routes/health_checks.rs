use crate::helpers::JsonResponse;
use actix_web::http::StatusCode;
use actix_web::{get, HttpRequest, HttpResponse};

#[get("")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub fn not_found_response(req: &HttpRequest) -> HttpResponse {
    JsonResponse::<()>::build().to_response(
        StatusCode::NOT_FOUND,
        &format!("Route {} {} not found", req.method(), req.path()),
    )
}

/// Fallback for requests no route or static file matched.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    not_found_response(&req)
}
