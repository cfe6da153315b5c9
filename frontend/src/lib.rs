pub mod app;
pub mod components;
pub mod config;
pub mod services;
pub mod styles;

pub use app::App;
