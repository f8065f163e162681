pub mod product;
pub mod review;

pub use product::{ProductForm, ProductPatch};
pub use review::{ReviewForm, ReviewPatch};

use crate::errors::{CatalogError, FieldError};

/// Flattens serde_valid's nested error report into one entry per violated rule.
pub(crate) fn field_errors(errors: &serde_valid::validation::Errors) -> Vec<FieldError> {
    let report = serde_json::to_value(errors).unwrap_or_default();
    let mut fields = vec![];

    if let Some(properties) = report.get("properties").and_then(|p| p.as_object()) {
        for (field, detail) in properties {
            let messages = detail
                .get("errors")
                .and_then(|e| e.as_array())
                .cloned()
                .unwrap_or_default();
            for message in messages {
                let message = message
                    .as_str()
                    .map(str::to_string)
                    .unwrap_or_else(|| message.to_string());
                fields.push(FieldError::new(field.as_str(), message));
            }
        }
    }

    if fields.is_empty() {
        fields.push(FieldError::new("body", errors.to_string()));
    }

    fields
}

pub(crate) fn missing(field: &str) -> FieldError {
    FieldError::new(field, format!("{} is a mandatory field", field))
}

pub(crate) fn into_result(errors: Vec<FieldError>) -> Result<(), CatalogError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CatalogError::ValidationFailed(errors))
    }
}
