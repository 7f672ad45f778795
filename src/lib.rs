pub mod api;
pub mod config;
pub mod favorites;
pub mod ui;
