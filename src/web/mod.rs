pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod view;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::config::RenderConfig;
use crate::core::state::QrState;

/// Router state: the page's input plus the render settings.
///
/// Handlers take the lock only around synchronous core calls, so every
/// operation runs to completion before the next one observes the state.
#[derive(Clone, Default)]
pub struct AppState {
    page: Arc<RwLock<QrState>>,
    render: Arc<RenderConfig>,
}

impl AppState {
    pub fn new(render: RenderConfig) -> Self {
        Self {
            page: Arc::new(RwLock::new(QrState::new())),
            render: Arc::new(render),
        }
    }

    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    pub fn read(&self) -> RwLockReadGuard<'_, QrState> {
        self.page.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, QrState> {
        self.page.write().unwrap_or_else(PoisonError::into_inner)
    }
}
