use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_ALLOWED_ORIGIN: &str = "*";

/// Credentials for the administrator created on first startup.
pub struct AdminBootstrap {
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Origin allowed by CORS, `*` for any.
    pub allowed_origin: String,
    /// Present only when every `ADMIN_*` variable is set.
    pub admin_bootstrap: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let admin_bootstrap = match (
            std::env::var("ADMIN_FIRST_NAME"),
            std::env::var("ADMIN_LAST_NAME"),
            std::env::var("ADMIN_PASSWORD"),
        ) {
            (Ok(first_name), Ok(last_name), Ok(password)) => Some(AdminBootstrap {
                first_name,
                last_name,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address,
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
            admin_bootstrap,
        })
    }
}
