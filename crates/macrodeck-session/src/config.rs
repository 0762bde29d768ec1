//! Session configuration and the `[session]` settings section.

use crate::credentials::CredentialPair;
use crate::port::{find_open_port, find_open_port_async, PortRange, DEFAULT_PORT_HIGH, DEFAULT_PORT_LOW};
use crate::random::SharedRng;
use macrodeck_core::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_PORT: u16 = 51234;
pub const PERSONAL_SERVER_NAME: &str = "Personal server";
pub const PERSONAL_HOST_NAME: &str = "localhost";

/// Tunables read from the `[session]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Lowest port a personal server may pick.
    pub port_low: u16,
    /// Highest port a personal server may pick (inclusive).
    pub port_high: u16,
    /// Port for explicitly configured servers.
    pub default_port: u16,
    pub server_name: Option<String>,
    pub host_name: Option<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            port_low: DEFAULT_PORT_LOW,
            port_high: DEFAULT_PORT_HIGH,
            default_port: DEFAULT_PORT,
            server_name: None,
            host_name: None,
        }
    }
}

impl SessionSettings {
    pub fn port_range(&self) -> Result<PortRange> {
        PortRange::new(self.port_low, self.port_high)
    }
}

/// Everything a hosted session needs to accept connections.
#[derive(Debug, Clone, Serialize)]
pub struct SessionConfig {
    pub host_player_id: Option<String>,
    credentials: CredentialPair,
    pub port: u16,
    pub server_name: Option<String>,
    pub host_name: Option<String>,
    pub personal_server: bool,
    pub use_easy_connect: bool,
}

impl SessionConfig {
    pub fn new(
        host_player_id: Option<String>,
        credentials: CredentialPair,
        port: u16,
        server_name: Option<String>,
        host_name: Option<String>,
        use_easy_connect: bool,
    ) -> Self {
        Self {
            host_player_id,
            credentials,
            port,
            server_name,
            host_name,
            personal_server: false,
            use_easy_connect,
        }
    }

    /// Configured server on the settings' port with fresh credentials.
    pub fn from_settings(settings: &SessionSettings, rng: &SharedRng) -> Self {
        Self::new(
            None,
            CredentialPair::generate(rng),
            settings.default_port,
            settings.server_name.clone(),
            settings.host_name.clone(),
            false,
        )
    }

    /// Local-only server on a random open port. Blocks while probing.
    pub fn personal(range: PortRange, rng: &SharedRng) -> Self {
        let credentials = CredentialPair::generate(rng);
        let port = find_open_port(range, rng);
        Self::personal_with(credentials, port)
    }

    /// [`SessionConfig::personal`] with the probe loop on a blocking thread.
    pub async fn personal_async(range: PortRange, rng: SharedRng) -> Result<Self> {
        let credentials = CredentialPair::generate(&rng);
        let port = find_open_port_async(range, rng).await?;
        Ok(Self::personal_with(credentials, port))
    }

    fn personal_with(credentials: CredentialPair, port: u16) -> Self {
        info!("Personal server bootstrapped on port {}", port);
        Self {
            host_player_id: None,
            credentials,
            port,
            server_name: Some(PERSONAL_SERVER_NAME.to_string()),
            host_name: Some(PERSONAL_HOST_NAME.to_string()),
            personal_server: true,
            use_easy_connect: false,
        }
    }

    pub fn credentials(&self) -> &CredentialPair {
        &self.credentials
    }

    pub fn gm_password(&self) -> &str {
        self.credentials.gm()
    }

    pub fn player_password(&self) -> &str {
        self.credentials.player()
    }

    pub fn gm_password_matches(&self, presented: Option<&str>) -> bool {
        self.credentials.gm_matches(presented)
    }

    pub fn player_password_matches(&self, presented: Option<&str>) -> bool {
        self.credentials.player_matches(presented)
    }

    /// Whether the server advertises itself under a name.
    pub fn is_server_registered(&self) -> bool {
        self.server_name.as_deref().is_some_and(|name| !name.is_empty())
    }
}
