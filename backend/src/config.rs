//! Server configuration.
//!
//! Defaults match the address the upload widget is compiled against.
//! The CLI overrides them from flags or `MONSTER_*` environment
//! variables (a `.env` file is honoured).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5000;

/// Directory uploaded files are written to.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// JSON file holding upload records.
pub const DEFAULT_INDEX_FILE: &str = "uploads.json";

/// Maximum request body size, in megabytes.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 50;

/// Everything `start_server` needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub index_file: PathBuf,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            index_file: PathBuf::from(DEFAULT_INDEX_FILE),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_addr_matches_widget() {
        let config = ServerConfig::default();
        assert_eq!(config.addr().to_string(), "127.0.0.1:5000");
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
    }
}
