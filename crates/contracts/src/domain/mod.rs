pub mod batch;
pub mod inspection;
pub mod product_type;
