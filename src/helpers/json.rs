use crate::errors::FieldError;
use actix_web::http::StatusCode;
use actix_web::{error, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonResponse<T> {
    pub(crate) status: String,
    pub(crate) message: String,
    pub(crate) code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) errors: Option<Vec<FieldError>>,
}

pub struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    id: Option<String>,
    item: Option<T>,
    errors: Option<Vec<FieldError>>,
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub fn set_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = Some(errors);
        self
    }

    fn into_body(self, code: StatusCode, message: &str) -> JsonResponse<T> {
        let status = if code.is_success() { "OK" } else { "Error" };

        JsonResponse {
            status: status.to_string(),
            message: message.to_string(),
            code: code.as_u16(),
            id: self.id,
            item: self.item,
            errors: self.errors,
        }
    }

    pub fn created(self, message: &str) -> HttpResponse {
        self.to_response(StatusCode::CREATED, message)
    }

    pub fn to_response(self, code: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(code).json(self.into_body(code, message))
    }

    fn to_error(self, code: StatusCode, message: &str) -> error::Error {
        let response = self.to_response(code, message);
        error::InternalError::from_response(message.to_string(), response).into()
    }

    pub fn bad_request(self, message: &str) -> error::Error {
        self.to_error(StatusCode::BAD_REQUEST, message)
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            id: None,
            item: None,
            errors: None,
        }
    }
}
