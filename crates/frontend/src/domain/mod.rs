pub mod about;
pub mod orders;
pub mod products;
