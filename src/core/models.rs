use serde::{Deserialize, Serialize};

use crate::core::state::QrState;

/// Where the page can be reached from other devices on the network.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerInfo {
    pub ip: String,
    pub port: u16,
}

impl ServerInfo {
    pub fn new(port: u16) -> Self {
        let ip = local_ip_address::local_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|_| "127.0.0.1".to_string());

        Self { ip, port }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.ip, self.port)
    }
}

/// Current input as seen by the page script.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub text: String,
    pub has_text: bool,
}

impl From<&QrState> for StateSnapshot {
    fn from(state: &QrState) -> Self {
        Self {
            text: state.text().to_string(),
            has_text: state.has_text(),
        }
    }
}

/// Reply to a state transition: the new state plus the re-rendered code region.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CodeResponse {
    #[serde(flatten)]
    pub state: StateSnapshot,
    pub html: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TextUpdate {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default)]
pub struct ViewportQuery {
    pub viewport: Option<u32>,
}
