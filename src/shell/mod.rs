// Composition root for the product catalog.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory catalog store and, when enabled, the rate limiter.
// - Wire them into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
