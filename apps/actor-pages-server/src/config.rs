//! Server configuration.
//!
//! Layered with figment: built-in defaults, then an optional YAML file, then
//! `ACTOR_PAGES_*` environment variables. Nested keys use `__`, e.g.
//! `ACTOR_PAGES_PAGES__ROOT_DOMAIN`.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

pub const ENV_PREFIX: &str = "ACTOR_PAGES_";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,

    /// SeaORM connection string; pages are kept in memory when unset
    #[serde(default)]
    pub database_url: Option<String>,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub pages: actor_pages::Config,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            database_url: None,
            json_logs: false,
            log_filter: default_log_filter(),
            pages: actor_pages::Config::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_log_filter() -> String {
    "info,sqlx=warn".to_string()
}

impl AppConfig {
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                anyhow::bail!("config file {} does not exist", path.display());
            }
        }
        Self::figment(path)
            .extract()
            .context("failed to load server configuration")
    }
}
