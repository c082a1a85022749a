pub mod commands;
pub mod controller;
pub mod store;

pub use controller::ChatController;
