pub mod product_payload;
