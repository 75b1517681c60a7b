pub mod metrics;
pub mod ui;
