mod product;
mod review;

pub use product::*;
pub use review::*;
