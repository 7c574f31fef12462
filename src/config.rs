use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let mongodb_uri = env::var("MONGODB_URI")
            .context("MONGODB_URI environment variable is required")?;

        let mongodb_database = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "coursesDb".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            mongodb_uri,
            mongodb_database,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  MongoDB database: {}", self.mongodb_database);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
