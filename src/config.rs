//! Runtime configuration resolved from the environment.

use std::env;
use std::path::PathBuf;

/// Server configuration.
///
/// Tests construct this directly; the binary reads it from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the listener to.
    pub host: String,
    /// Listener port.
    pub port: u16,
    /// Directory holding the static client page.
    pub static_dir: PathBuf,
}

impl Config {
    /// Resolve configuration from `HOST`, `PORT` and `STATIC_DIR`.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public"));

        Self {
            host,
            port,
            static_dir,
        }
    }
}
