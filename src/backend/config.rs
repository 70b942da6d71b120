use std::net::{IpAddr, SocketAddr};
use clap::Parser;
use super::error::{BackendError, Result};

/// Stub backend that logs visitor progress and stories
#[derive(Parser, Debug, Clone)]
#[command(name = "magic-backend")]
#[command(version, about = "Logs StoryWorld progress and stories, always answering success")]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| BackendError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["magic-backend"]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.bind_addr().unwrap().port(), config.port);
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from(["magic-backend", "--port", "8080", "--host", "127.0.0.1"]).unwrap();
        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_host() {
        let config = ServerConfig {
            host: "not a host".into(),
            ..Default::default()
        };
        assert!(matches!(config.bind_addr(), Err(BackendError::InvalidHost(_))));
    }
}
