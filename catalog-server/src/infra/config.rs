use std::env;

/// Runtime configuration, resolved from the environment (after `dotenvy`)
/// with CLI overrides applied in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    /// Permissive CORS and relaxed defaults for local development.
    pub dev_mode: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
/// The development storefront client.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

impl Config {
    /// Resolve configuration from the process environment. Every variable
    /// has a default except `DATABASE_URL`, which stays `None` here and is
    /// required only when the server actually connects.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT is not a valid port: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };
        let url = env::var("DATABASE_URL").ok();
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|_| vec![DEFAULT_ALLOWED_ORIGIN.to_string()]);
        let dev_mode = env::var("CATALOG_DEV_MODE")
            .map(|raw| parse_bool(&raw))
            .unwrap_or(false);

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig { url },
            cors: CorsConfig { allowed_origins },
            dev_mode,
        })
    }
}

/// Split a comma-separated origin list, dropping blank entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
