pub mod domain;
pub mod fetcher;
pub mod models;

/// Path prefix of the product resource, relative to the configured base URL.
pub const PRODUCTS_PATH: &str = "api/products";
