use anyhow::Result;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::core::config::RenderConfig;
use crate::web::routes::create_app;

pub struct WebServer {
    addr: SocketAddr,
    render: RenderConfig,
}

impl WebServer {
    pub fn new(addr: SocketAddr, render: RenderConfig) -> Self {
        Self { addr, render }
    }

    /// Serve until `shutdown` resolves, then let in-flight requests finish.
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = create_app(self.render.clone());

        info!("Starting web server on {}", self.addr);
        let listener = TcpListener::bind(self.addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_returns_after_shutdown_signal() {
        let server = WebServer::new(SocketAddr::from(([127, 0, 0, 1], 0)), RenderConfig::default());

        let result = tokio::time::timeout(
            std::time::Duration::from_secs(5),
            server.run(async {}),
        )
        .await;

        assert!(matches!(result, Ok(Ok(()))));
    }
}
