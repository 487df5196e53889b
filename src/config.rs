//! Server configuration

/// Admin principal configuration
///
/// A single admin identity; callers prove it by logging in and presenting
/// the issued bearer token on every mutating call.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
    /// Lifetime of issued bearer tokens, in hours
    pub token_ttl_hours: i64,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "family2026".to_string(),
            token_ttl_hours: 12,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    /// Directory where member photos land; served references look like
    /// `/uploads/{filename}`
    pub uploads_dir: String,
    pub log_level: String,
    /// Secret the token signing key is derived from
    pub token_secret: String,
    pub admin: AdminConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_path: "./kintree.db".to_string(),
            uploads_dir: "./uploads".to_string(),
            log_level: "info".to_string(),
            token_secret: "change-me-token-secret".to_string(),
            admin: AdminConfig::default(),
        }
    }
}
