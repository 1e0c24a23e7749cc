use anyhow::Context;

use crate::slots::DEFAULT_SLOT_INTERVAL_MINUTES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: String,
    pub cors_origins: Vec<String>,
    pub store_backend: StoreBackend,
    pub data_path: String,
    pub slot_interval_minutes: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let store_backend = match std::env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "file".into())
            .as_str()
        {
            "file" => StoreBackend::File,
            "memory" => StoreBackend::Memory,
            other => anyhow::bail!("STORE_BACKEND must be 'file' or 'memory', got '{other}'"),
        };

        let slot_interval_minutes: u16 = std::env::var("SLOT_INTERVAL_MINUTES")
            .unwrap_or_else(|_| DEFAULT_SLOT_INTERVAL_MINUTES.to_string())
            .parse()
            .context("SLOT_INTERVAL_MINUTES must be a number")?;
        if slot_interval_minutes == 0 || slot_interval_minutes > 24 * 60 {
            anyhow::bail!("SLOT_INTERVAL_MINUTES must be between 1 and 1440");
        }

        Ok(Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            store_backend,
            data_path: std::env::var("DATA_PATH").unwrap_or_else(|_| "data/db.json".into()),
            slot_interval_minutes,
        })
    }
}
