pub mod api;
pub mod pricing;
pub mod ui;
