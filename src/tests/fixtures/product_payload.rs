// Shared test fixture for product request bodies.
// Defaults come from json/product_payload.json; setters override single fields.

use crate::modules::products::core::product::ProductDraft;
use crate::modules::products::core::validation::ProductPayload;
use std::fs;

const FIXTURE_PATH: &str = "./src/tests/fixtures/json/product_payload.json";

pub struct ProductPayloadBuilder {
    inner: ProductPayload,
}

impl Default for ProductPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ProductPayloadBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(FIXTURE_PATH).unwrap();
        let inner: ProductPayload = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn sku(mut self, v: impl Into<String>) -> Self {
        self.inner.sku = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn build(self) -> ProductPayload {
        self.inner
    }

    /// Skips validation; for store-level tests that need a draft directly.
    pub fn build_draft(self) -> ProductDraft {
        ProductDraft {
            sku: self.inner.sku,
            name: self.inner.name,
            price: self.inner.price,
            description: self.inner.description,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sku": self.inner.sku,
            "name": self.inner.name,
            "price": self.inner.price,
            "description": self.inner.description,
        })
    }
}

#[cfg(test)]
mod product_payload_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = ProductPayloadBuilder::default().build();
        assert_eq!(built.sku, "WIDGET-001");
        assert_eq!(built.name, "Blue Widget");
        assert_eq!(built.price, 29.99);
        assert_eq!(built.description, "A beautiful blue widget");
    }

    #[rstest]
    fn setters_override_all_fields() {
        let builder = ProductPayloadBuilder::new()
            .sku("GADGET-9")
            .name("Gadget")
            .price(1.5)
            .description("desc");

        assert_eq!(
            builder.to_json(),
            serde_json::json!({
                "sku": "GADGET-9",
                "name": "Gadget",
                "price": 1.5,
                "description": "desc",
            })
        );
        let draft = builder.build_draft();
        assert_eq!(draft.sku, "GADGET-9");
        assert_eq!(draft.price, 1.5);
    }
}
