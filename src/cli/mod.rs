use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::core::app::App;
use crate::core::config::{AppConfig, EXAMPLE_CONFIG_FILE};
use crate::core::providers::{open_provider, SystemLauncher};
use crate::utils::network::resolve_port;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on (will find next available port if this one is in use)
    #[arg(short, long)]
    port: Option<u16>,

    /// Address to bind the web server to
    #[arg(long)]
    host: Option<String>,

    /// Open web browser automatically
    #[arg(short, long)]
    open: bool,

    /// Do not print the terminal QR code of the page address
    #[arg(long)]
    no_banner: bool,

    /// Open a cloud storage provider (google, onedrive, icloud) and exit
    #[arg(long, value_name = "ID")]
    provider: Option<String>,

    /// Generate example configuration file
    #[arg(long)]
    generate_config: bool,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        if self.generate_config {
            AppConfig::save_example()?;
            println!("Generated example configuration file: {}", EXAMPLE_CONFIG_FILE);
            return Ok(());
        }

        if let Some(ref id) = self.provider {
            let target = open_provider(id, &SystemLauncher)?;
            println!("Opened {}", target.location());
            return Ok(());
        }

        let mut config = AppConfig::load().unwrap_or_else(|e| {
            info!("Using default configuration ({})", e);
            AppConfig::default()
        });
        self.apply_overrides(&mut config);

        let port = resolve_port(config.server.port);
        let app = App::new(port, config)?;
        app.run().await
    }

    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if self.open {
            config.ui.open_browser = true;
        }
        if self.no_banner {
            config.ui.banner = false;
        }
    }
}
