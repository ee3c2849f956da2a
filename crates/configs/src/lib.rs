use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use tracing::warn;

/// Port used when `PORT` is absent.
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backup: BackupConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: DEFAULT_PORT, worker_threads: None }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir() }
    }
}

fn default_host() -> String { DEFAULT_HOST.to_string() }
fn default_port() -> u16 { DEFAULT_PORT }
fn default_output_dir() -> String { ".".to_string() }

/// Parse a `PORT` value. Missing or unparsable values fall back to [`DEFAULT_PORT`].
pub fn resolve_port(raw: Option<&str>) -> u16 {
    match raw.map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(v) => match v.parse::<u16>() {
            Ok(p) => p,
            Err(e) => {
                warn!(value = %v, error = %e, "PORT is not a valid port number; using default");
                DEFAULT_PORT
            }
        },
    }
}

/// Load from `CONFIG_PATH` (default `config.toml`); a missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)
        .map_err(|e| anyhow!("invalid config file {path}: {e}"))?;
    Ok(cfg)
}

impl AppConfig {
    /// File config, then environment overrides, then validation.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Apply `PORT` / `HOST` overrides using the given lookup.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.server.port = resolve_port(Some(&raw));
        }
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        if self.backup.output_dir.trim().is_empty() {
            self.backup.output_dir = default_output_dir();
        }
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}
