pub mod images;
pub(crate) mod json;

pub use images::ImageStore;
pub use json::*;
