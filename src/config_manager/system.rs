use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// System configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(rename = "log_filter")]
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    12394
}

fn default_log_filter() -> String {
    "selection_translator=debug,tower_http=debug".to_string()
}

impl SystemConfig {
    /// Address the server binds to. `localhost` maps to the loopback address.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let host = match self.host.as_str() {
            "localhost" => "127.0.0.1",
            other => other,
        };
        let addr = format!("{}:{}", host, self.port).parse()?;
        Ok(addr)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localhost_binds_loopback() {
        let config = SystemConfig::default();
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:12394".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn invalid_host_is_an_error() {
        let config = SystemConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn legacy_version_key_is_ignored() {
        let config: SystemConfig =
            serde_json::from_str(r#"{"conf_version": "v1.0.0", "port": 9000}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "localhost");
    }
}
