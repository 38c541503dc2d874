mod product;
mod product_dimension;
mod product_flag;

pub use self::{
    product::Product, product_dimension::ProductDimension, product_flag::ProductFlag,
};

use crate::catalog::fallback_records;

/// Products served when neither the local storage nor the remote source have any.
pub fn fallback_products() -> anyhow::Result<Vec<Product>> {
    fallback_records("products.json")
}
