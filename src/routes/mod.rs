pub mod health_checks;
pub(crate) mod product;
pub(crate) mod review;

pub use health_checks::*;

/// Method and path of every API route, logged at startup.
pub const ENDPOINTS: &[(&str, &str)] = &[
    ("GET", "/health_check"),
    ("POST", "/products"),
    ("GET", "/products"),
    ("GET", "/products/{productId}"),
    ("PUT", "/products/{productId}"),
    ("DELETE", "/products/{productId}"),
    ("POST", "/products/{productId}/uploadImageUrl"),
    ("GET", "/products/{productId}/reviews"),
    ("POST", "/products/{productId}/reviews"),
    ("PUT", "/products/{productId}/reviews/{reviewId}"),
    ("DELETE", "/products/{productId}/reviews/{reviewId}"),
];
