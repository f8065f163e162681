mod catalog;
pub mod product;
pub mod review;

pub use catalog::{CatalogStore, Outcome};
