use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::config::{optional_env, parse_optional_env};
use crate::error::ConfigError;

/// Default request body cap (1 MiB).
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// HTTP gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl GatewayConfig {
    pub(crate) fn resolve() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = match optional_env("GATEWAY_HOST")? {
            Some(raw) => raw.parse().map_err(|e| ConfigError::InvalidValue {
                key: "GATEWAY_HOST".to_string(),
                message: format!("'{raw}' is not an IP address: {e}"),
            })?,
            None => defaults.host,
        };
        let port = parse_optional_env("GATEWAY_PORT", defaults.port)?;
        let max_body_bytes = parse_optional_env("GATEWAY_MAX_BODY_BYTES", defaults.max_body_bytes)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "GATEWAY_MAX_BODY_BYTES".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            host,
            port,
            max_body_bytes,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_MUTEX;

    fn clear_gateway_env() {
        // SAFETY: Only called under ENV_MUTEX in tests.
        unsafe {
            std::env::remove_var("GATEWAY_HOST");
            std::env::remove_var("GATEWAY_PORT");
            std::env::remove_var("GATEWAY_MAX_BODY_BYTES");
        }
    }

    #[test]
    fn defaults_when_no_env() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_gateway_env();

        let config = GatewayConfig::resolve().expect("should resolve");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn env_overrides() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_gateway_env();

        // SAFETY: Under ENV_MUTEX.
        unsafe {
            std::env::set_var("GATEWAY_HOST", "0.0.0.0");
            std::env::set_var("GATEWAY_PORT", "8080");
        }

        let config = GatewayConfig::resolve().expect("should resolve");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");

        clear_gateway_env();
    }

    #[test]
    fn invalid_host_rejected() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_gateway_env();

        // SAFETY: Under ENV_MUTEX.
        unsafe {
            std::env::set_var("GATEWAY_HOST", "localhost");
        }

        let result = GatewayConfig::resolve();
        assert!(matches!(result, Err(ConfigError::InvalidValue { ref key, .. }) if key == "GATEWAY_HOST"));

        clear_gateway_env();
    }

    #[test]
    fn zero_body_limit_rejected() {
        let _guard = ENV_MUTEX.lock().expect("env mutex poisoned");
        clear_gateway_env();

        // SAFETY: Under ENV_MUTEX.
        unsafe {
            std::env::set_var("GATEWAY_MAX_BODY_BYTES", "0");
        }

        assert!(GatewayConfig::resolve().is_err());

        clear_gateway_env();
    }
}
