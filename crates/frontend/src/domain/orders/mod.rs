pub mod api;
pub mod invoice;
pub mod state;
pub mod status;
pub mod ui;
