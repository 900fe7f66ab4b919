//! Configuration management for Kinship services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (KINSHIP__ prefix, `__` between sections)
//! 2. Config file (kinship.toml)
//! 3. Defaults

use serde::Deserialize;

use crate::error::KinshipError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KinshipConfig {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Connection settings for the Neo4j graph store.
///
/// Loaded from the `[neo4j]` section or `KINSHIP__NEO4J__*` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Target database name. The server default database is used when unset.
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "kinship-dev".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            database: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl KinshipConfig {
    /// Load configuration from `<file_prefix>.toml` (optional) overlaid with
    /// `KINSHIP__` environment variables.
    pub fn load(file_prefix: &str) -> Result<Self, KinshipError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("KINSHIP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = cfg.try_deserialize()?;
        tracing::debug!(
            uri = %loaded.neo4j.uri,
            bind = %loaded.server.bind_addr(),
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KinshipConfig::default();
        assert_eq!(config.neo4j.uri, "bolt://localhost:7687");
        assert_eq!(config.neo4j.user, "neo4j");
        assert_eq!(config.neo4j.max_connections, 16);
        assert!(config.neo4j.database.is_none());
        assert_eq!(config.server.bind_addr(), "127.0.0.1:5000");
        assert!(config.server.cors_origins.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("family.toml");
        std::fs::write(
            &path,
            r#"
[neo4j]
uri = "neo4j+s://example.databases.neo4j.io"
password = "s3cret"

[server]
port = 8080
cors_origins = ["http://localhost:3000"]
"#,
        )
        .unwrap();

        let prefix = dir.path().join("family");
        let config = KinshipConfig::load(prefix.to_str().unwrap()).unwrap();

        assert_eq!(config.neo4j.uri, "neo4j+s://example.databases.neo4j.io");
        assert_eq!(config.neo4j.password, "s3cret");
        // Unset keys fall back to defaults.
        assert_eq!(config.neo4j.user, "neo4j");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("absent");
        let config = KinshipConfig::load(prefix.to_str().unwrap()).unwrap();
        assert_eq!(config.neo4j.fetch_size, 256);
        assert_eq!(config.server.port, 5000);
    }
}
