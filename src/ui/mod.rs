pub mod app;
pub mod events;
pub mod fetch;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod page;
pub mod render;
pub mod resource;
pub mod route;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
