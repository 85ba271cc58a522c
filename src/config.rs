use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// takes precedence over `host` when set
    pub socket: Option<PathBuf>,
    pub host: String,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            socket: None,
            host: "localhost".into(),
            username: "root".into(),
            password: "".into(),
            database: "vertigo_db".into(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_vars(|key| std::env::var(key).ok()))
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(db_socket) = var("DB_SOCKET").filter(|s| !s.is_empty()) {
            config.database.socket = Some(PathBuf::from(db_socket));
        }
        if let Some(db_host) = var("DB_HOST") {
            config.database.host = db_host;
        }
        if let Some(db_user) = var("DB_USER") {
            config.database.username = db_user;
        }
        if let Some(db_pass) = var("DB_PASSWORD") {
            config.database.password = db_pass;
        }
        if let Some(db_name) = var("DB_NAME") {
            config.database.database = db_name;
        }

        config
    }
}
