//! linkqr - turn a sharing link into a downloadable QR code
//!
//! A small local web page: paste a URL, get a high error-correction QR code
//! and save it as `qrcode.png`. Shortcuts open the common cloud storage
//! providers so a PDF can be shared first and its link pasted back.

pub mod core;
pub mod utils;
pub mod web;
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::{
    config::{AppConfig, RenderConfig},
    error::{AppError, AppResult},
    export::{download, Download, DOWNLOAD_FILE_NAME},
    providers::{open_provider, resolve, Launcher, Provider, SystemLauncher, Target, PROVIDERS},
    render::{render_image, render_view, View},
    state::{Action, Phase, QrState},
};

pub use crate::utils::network::{find_available_port, is_port_available, resolve_port};

pub use crate::web::{
    routes::{create_app, create_app_with_state, create_routes, create_routes_with_state},
    server::WebServer,
    AppState,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
