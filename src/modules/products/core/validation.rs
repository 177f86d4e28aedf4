// Input validation for product payloads.
//
// Validation happens before the catalog store is consulted. Every failing
// field is reported, not just the first one.

use crate::modules::products::core::product::ProductDraft;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request body for create and update. Unknown fields (including a
/// caller-supplied `id`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn body_field(field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string(), field.to_string()],
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    pub fn malformed_body(msg: impl Into<String>) -> Self {
        Self {
            loc: vec!["body".to_string()],
            msg: msg.into(),
            kind: "json_invalid".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid request: {}", field_paths(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn field_paths(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.loc.join("."))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl ProductPayload {
    pub fn validate(self) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = Vec::new();
        collect_field_errors(&self, &mut errors);
        finish(self, errors)
    }

    /// Validates an update body. The SKU in the path is the key being
    /// modified, so a body naming a different SKU is rejected.
    pub fn validate_for_sku(self, path_sku: &str) -> Result<ProductDraft, ValidationErrors> {
        let mut errors = Vec::new();
        collect_field_errors(&self, &mut errors);
        if self.sku != path_sku {
            errors.push(FieldError::body_field(
                "sku",
                format!("SKU must match the SKU in the path ('{path_sku}')"),
                "sku_mismatch",
            ));
        }
        finish(self, errors)
    }
}

fn collect_field_errors(payload: &ProductPayload, errors: &mut Vec<FieldError>) {
    if payload.sku.trim().is_empty() {
        errors.push(FieldError::body_field(
            "sku",
            "SKU must not be empty",
            "string_too_short",
        ));
    }
    if !payload.price.is_finite() {
        errors.push(FieldError::body_field(
            "price",
            "Input should be a finite number",
            "finite_number",
        ));
    } else if payload.price <= 0.0 {
        errors.push(FieldError::body_field(
            "price",
            "Input should be greater than 0",
            "greater_than",
        ));
    }
}

fn finish(payload: ProductPayload, errors: Vec<FieldError>) -> Result<ProductDraft, ValidationErrors> {
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }
    Ok(ProductDraft {
        sku: payload.sku,
        name: payload.name,
        price: payload.price,
        description: payload.description,
    })
}
