pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod providers;
pub mod render;
pub mod state;
