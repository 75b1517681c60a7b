pub mod batches;
pub mod inspections;
pub mod product_types;
