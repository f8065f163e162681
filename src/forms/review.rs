use crate::errors::{CatalogError, FieldError};
use crate::forms::{field_errors, into_result, missing};
use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_valid::Validate;

/// Range rule for a rate once it has been read as a number.
#[derive(Debug, Validate)]
struct RateRule {
    #[validate(minimum = 0.0)]
    #[validate(maximum = 5.0)]
    rate: f64,
}

/// Reads a rate sent either as a JSON number or as a numeric string such as `"4"`.
fn parse_rate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|rate| rate.is_finite()),
        _ => None,
    }
}

fn rate_errors(value: &Value) -> Vec<FieldError> {
    let rate = match parse_rate(value) {
        Some(rate) => rate,
        None => return vec![FieldError::new("rate", "rate must be a number between 0 and 5")],
    };

    match (RateRule { rate }).validate() {
        Ok(()) => vec![],
        Err(report) => field_errors(&report),
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ReviewForm {
    pub comment: Option<Value>,
    pub rate: Option<Value>,
}

impl ReviewForm {
    pub fn check(&self) -> Result<(), CatalogError> {
        let mut errors = vec![];
        if self.comment.is_none() {
            errors.push(missing("comment"));
        }
        match &self.rate {
            Some(rate) => errors.extend(rate_errors(rate)),
            None => errors.push(missing("rate")),
        }

        into_result(errors)
    }

    /// Builds the stored review. The rate is kept as a number whatever form it came in.
    pub fn into_review(self, id: String, product_id: &str) -> models::Review {
        models::Review {
            id,
            comment: self.comment.unwrap_or_default(),
            rate: self.rate.as_ref().and_then(parse_rate).unwrap_or_default(),
            product_id: product_id.to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ReviewPatch {
    pub comment: Option<Value>,
    pub rate: Option<Value>,
}

impl ReviewPatch {
    pub fn check(&self) -> Result<(), CatalogError> {
        let errors = self.rate.as_ref().map(rate_errors).unwrap_or_default();
        into_result(errors)
    }

    pub fn update(self, review: &mut models::Review) {
        if let Some(comment) = self.comment {
            review.comment = comment;
        }
        if let Some(rate) = self.rate.as_ref().and_then(parse_rate) {
            review.rate = rate;
        }
    }
}
