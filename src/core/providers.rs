//! Cloud storage shortcuts.
//!
//! The provider set is closed. An id outside it resolves to a blank target
//! instead of an error, so a stale or hand-edited link still opens a tab.

use serde::Serialize;
use tracing::{info, warn};

use crate::core::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Google,
    OneDrive,
    ICloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProviderEntry {
    pub provider: Provider,
    pub id: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub static PROVIDERS: [ProviderEntry; 3] = [
    ProviderEntry {
        provider: Provider::Google,
        id: "google",
        label: "Google Drive",
        url: "https://drive.google.com",
    },
    ProviderEntry {
        provider: Provider::OneDrive,
        id: "onedrive",
        label: "OneDrive",
        url: "https://onedrive.live.com",
    },
    ProviderEntry {
        provider: Provider::ICloud,
        id: "icloud",
        label: "iCloud",
        url: "https://www.icloud.com/",
    },
];

impl Provider {
    pub fn from_id(id: &str) -> Option<Self> {
        PROVIDERS
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.provider)
    }

    pub fn entry(self) -> &'static ProviderEntry {
        match self {
            Provider::Google => &PROVIDERS[0],
            Provider::OneDrive => &PROVIDERS[1],
            Provider::ICloud => &PROVIDERS[2],
        }
    }

    pub fn url(self) -> &'static str {
        self.entry().url
    }
}

/// Where a shortcut navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Url(&'static str),
    /// Fallback for unknown ids: an empty browsing context.
    Blank,
}

impl Target {
    /// The target as a URL string; empty for [`Target::Blank`].
    pub fn as_str(&self) -> &'static str {
        match *self {
            Target::Url(url) => url,
            Target::Blank => "",
        }
    }

    /// An address a system browser accepts.
    pub fn location(&self) -> &'static str {
        match *self {
            Target::Url(url) => url,
            Target::Blank => "about:blank",
        }
    }
}

pub fn resolve(provider_id: &str) -> Target {
    match Provider::from_id(provider_id) {
        Some(provider) => Target::Url(provider.url()),
        None => Target::Blank,
    }
}

/// Opens a location in a new, independent browsing context.
pub trait Launcher {
    fn launch(&self, location: &str) -> AppResult<()>;
}

/// Hands locations to the desktop's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, location: &str) -> AppResult<()> {
        open::that(location).map_err(|e| AppError::Launch {
            target: location.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Resolve `provider_id` and open it. Never fails on an unknown id.
pub fn open_provider(provider_id: &str, launcher: &dyn Launcher) -> AppResult<Target> {
    let target = resolve(provider_id);
    if target == Target::Blank {
        warn!("Unknown provider '{}', opening a blank page", provider_id);
    } else {
        info!("Opening {} for provider '{}'", target.as_str(), provider_id);
    }
    launcher.launch(target.location())?;
    Ok(target)
}
