pub mod badge;
pub mod spinner;

pub use badge::Badge;
pub use spinner::Spinner;
