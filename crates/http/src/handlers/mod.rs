pub mod health;
pub mod packages;
