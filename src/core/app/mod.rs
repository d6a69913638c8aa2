use anyhow::Result;
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::core::models::ServerInfo;
use crate::core::providers::{Launcher, SystemLauncher};
use crate::utils::qrcode::generate_banner;
use crate::web::server::WebServer;

pub struct App {
    addr: SocketAddr,
    config: AppConfig,
    server_info: ServerInfo,
}

impl App {
    pub fn new(port: u16, config: AppConfig) -> Result<Self> {
        let host: IpAddr = config.server.host.parse()?;
        let server_info = ServerInfo::new(port);

        Ok(Self {
            addr: SocketAddr::new(host, port),
            config,
            server_info,
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!("QR generator available at: {}", self.server_info.url());

        if self.config.ui.banner {
            match generate_banner(&self.server_info.url()) {
                Ok(banner) => println!("{}", banner),
                Err(e) => error!("Failed to generate QR code: {}", e),
            }
        }

        if self.config.ui.open_browser {
            let local_url = format!("http://127.0.0.1:{}", self.addr.port());
            if let Err(e) = SystemLauncher.launch(&local_url) {
                error!("Failed to open browser: {}", e);
            }
        }

        let server = WebServer::new(self.addr, self.config.render.clone());

        let shutdown_signal = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Received Ctrl+C, shutting down gracefully...");
        };

        if let Err(e) = server.run(shutdown_signal).await {
            error!("Server error: {}", e);
            return Err(e);
        }

        info!("Shutdown complete");
        Ok(())
    }
}
