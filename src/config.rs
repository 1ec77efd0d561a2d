// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;

/// Environment variable names for server configuration
pub const LISTEN_ADDR_ENV: &str = "LETTERFORGE_LISTEN_ADDR";
pub const DATA_DIR_ENV: &str = "LETTERFORGE_DATA_DIR";

/// Default bind address, matching the port the builder UI expects
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:5000";
/// Default data directory (layout, saved config, uploads)
pub const DEFAULT_DATA_DIR: &str = ".";

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address and port the HTTP server binds to
    pub listen_addr: String,
    /// Directory holding `layout.html`, `emailConfig.json` and `uploads/`
    pub data_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl ServerConfig {
    /// Load server configuration from environment variables or use defaults
    pub fn from_env() -> Self {
        let listen_addr = std::env::var(LISTEN_ADDR_ENV)
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

        let data_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            listen_addr,
            data_dir,
        }
    }
}
