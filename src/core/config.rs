use serde::{Deserialize, Serialize};
use anyhow::Result;

pub const CONFIG_FILE: &str = "linkqr.toml";
pub const EXAMPLE_CONFIG_FILE: &str = "linkqr.example.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

/// Size and layout of the rendered code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Upper bound on the code's edge length in pixels.
    #[serde(default = "default_max_size")]
    pub max_size: u32,
    /// Subtracted from the reported viewport width before capping.
    #[serde(default = "default_viewport_padding")]
    pub viewport_padding: u32,
    #[serde(default = "default_true")]
    pub quiet_zone: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Print a terminal QR code of the page address at startup.
    #[serde(default = "default_true")]
    pub banner: bool,
    #[serde(default = "default_false")]
    pub open_browser: bool,
}

// Default value functions
fn default_port() -> u16 { 8080 }
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_max_size() -> u32 { 256 }
fn default_viewport_padding() -> u32 { 64 }
fn default_true() -> bool { true }
fn default_false() -> bool { false }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            viewport_padding: default_viewport_padding(),
            quiet_zone: default_true(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            banner: default_true(),
            open_browser: default_false(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix("LINKQR").separator("__"));

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(host) = std::env::var("HOST") {
            builder = builder.set_override("server.host", host)?;
        }

        let settings = builder.build()?;
        let config: AppConfig = settings.try_deserialize()?;
        Ok(config)
    }

    pub fn save_example() -> Result<()> {
        let example_config = AppConfig::default();
        let toml_string = toml::to_string_pretty(&example_config)?;
        std::fs::write(EXAMPLE_CONFIG_FILE, toml_string)?;
        Ok(())
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(toml_content)?;
        Ok(config)
    }
}
