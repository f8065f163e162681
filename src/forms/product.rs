use crate::errors::{CatalogError, FieldError};
use crate::forms::{into_result, missing};
use crate::models;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /products`. Every field is optional at the serde level so that all
/// missing fields are reported together instead of failing on the first one.
/// Values are taken as sent; `null` counts as missing.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
    pub brand: Option<Value>,
}

impl ProductForm {
    pub fn check(&self) -> Result<(), CatalogError> {
        let mut errors = vec![];
        if self.name.is_none() {
            errors.push(missing("name"));
        }
        if self.description.is_none() {
            errors.push(missing("description"));
        }
        if self.category.is_none() {
            errors.push(missing("category"));
        }
        if self.price.is_none() {
            errors.push(missing("price"));
        }
        if self.brand.is_none() {
            errors.push(missing("brand"));
        }

        into_result(errors)
    }

    /// Builds a new record. Expects a checked form: absent fields become `null`.
    pub fn into_product(self, id: String) -> models::Product {
        models::Product {
            id,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            price: self.price.unwrap_or_default(),
            brand: self.brand.unwrap_or_default(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: None,
            reviews: vec![],
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(name: &str, category: &str) -> ProductForm {
    ProductForm {
        name: Some(Value::from(name)),
        description: Some(Value::from("blue")),
        category: Some(Value::from(category)),
        price: Some(Value::from(2)),
        brand: Some(Value::from("Acme")),
    }
}

/// Body of `PUT /products/{id}`: only the fields present are written.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub category: Option<Value>,
    pub price: Option<Value>,
    pub brand: Option<Value>,
    pub image_url: Option<Value>,
}

impl ProductPatch {
    /// `imageUrl` is served back as a link, so it has to be a string.
    pub fn check(&self) -> Result<(), CatalogError> {
        let mut errors = vec![];
        if matches!(&self.image_url, Some(url) if !url.is_string()) {
            errors.push(FieldError::new("imageUrl", "imageUrl must be a string"));
        }

        into_result(errors)
    }

    pub fn update(self, product: &mut models::Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(category) = self.category {
            product.category = category;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(brand) = self.brand {
            product.brand = brand;
        }
        if let Some(Value::String(image_url)) = self.image_url {
            product.image_url = Some(image_url);
        }
    }
}
