use std::{fs, path::Path};
use serde::{Serialize, Deserialize};
use toml;
use anyhow::{self, Context};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tracing filter directive, overridden by `RUST_LOG`
    pub log_filter: String
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            log_filter: "info".to_owned()
        }
    }
}

impl ServerConfig {
    pub fn read(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file_content = fs::read_to_string(filepath)
            .with_context(|| "failed to read config file")?;
        Self::parse(&file_content)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str(content)
            .with_context(|| "failed to parse config file")?;
        return Ok(config);
    }

    /// Reads `filepath` if it exists, otherwise falls back to defaults.
    pub fn read_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        if filepath.as_ref().exists() {
            Self::read(filepath)
        } else {
            Ok(Self::default())
        }
    }

    /// Host name or IP address with port, resolved when binding.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}


#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ServerConfig::parse("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = ServerConfig::parse("port = 8080\nlog_filter = \"debug\"").unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.listen_addr(), ("127.0.0.1", 8080));
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(ServerConfig::parse("port = \"eighty\"").is_err());
    }

    #[test]
    fn missing_default_file_falls_back() {
        let config = ServerConfig::read_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn host_may_be_a_name() {
        let config = ServerConfig::parse("host = \"localhost\"").unwrap();
        assert_eq!(config.listen_addr(), ("localhost", 5000));
    }

    #[tokio::test]
    async fn binds_by_host_name() {
        let config = ServerConfig { host: "localhost".to_owned(), port: 0, ..ServerConfig::default() };
        let listener = tokio::net::TcpListener::bind(config.listen_addr()).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
