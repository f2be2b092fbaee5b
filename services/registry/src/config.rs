//! Registry configuration.
//!
//! # Purpose
//! Reads listener addresses and startup options from environment variables,
//! then applies an optional YAML override file named by `ZOO_CONFIG`.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:5000";
pub const DEFAULT_METRICS_BIND: &str = "0.0.0.0:9090";

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub bind_addr: SocketAddr,
    pub metrics_bind: SocketAddr,
    /// Load the fixed startup records into the store.
    pub seed: bool,
}

#[derive(Debug, Deserialize)]
struct RegistryConfigOverride {
    bind_addr: Option<String>,
    metrics_bind: Option<String>,
    seed: Option<bool>,
}

impl RegistryConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = std::env::var("ZOO_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND.to_string())
            .parse()
            .with_context(|| "parse ZOO_BIND")?;
        let metrics_bind = std::env::var("ZOO_METRICS_BIND")
            .unwrap_or_else(|_| DEFAULT_METRICS_BIND.to_string())
            .parse()
            .with_context(|| "parse ZOO_METRICS_BIND")?;
        let seed = match std::env::var("ZOO_SEED") {
            Ok(value) => parse_flag(&value).with_context(|| "parse ZOO_SEED")?,
            Err(_) => true,
        };
        Ok(Self {
            bind_addr,
            metrics_bind,
            seed,
        })
    }

    pub fn from_env_or_yaml() -> Result<Self> {
        let mut config = Self::from_env()?;
        if let Ok(path) = std::env::var("ZOO_CONFIG") {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read ZOO_CONFIG: {path}"))?;
            config.apply_yaml(&contents)?;
        }
        Ok(config)
    }

    fn apply_yaml(&mut self, contents: &str) -> Result<()> {
        let override_cfg: RegistryConfigOverride =
            serde_yaml::from_str(contents).with_context(|| "parse registry config yaml")?;
        if let Some(value) = override_cfg.bind_addr {
            self.bind_addr = value.parse().with_context(|| "parse bind_addr")?;
        }
        if let Some(value) = override_cfg.metrics_bind {
            self.metrics_bind = value.parse().with_context(|| "parse metrics_bind")?;
        }
        if let Some(value) = override_cfg.seed {
            self.seed = value;
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
