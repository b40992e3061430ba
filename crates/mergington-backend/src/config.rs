use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use mergington::errors::ConfigError;

const HOST_VAR: &str = "MERGINGTON_HOST";
const PORT_VAR: &str = "MERGINGTON_PORT";
const STATIC_DIR_VAR: &str = "MERGINGTON_STATIC_DIR";

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR) {
            config.host = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: HOST_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            config.port = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: PORT_VAR,
                value,
            })?;
        }
        if let Some(value) = lookup(STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn overrides_from_environment() {
        let config = Config::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "3030"),
            (STATIC_DIR_VAR, "/srv/mergington"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:3030");
        assert_eq!(config.static_dir, PathBuf::from("/srv/mergington"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[(PORT_VAR, "eighty")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { key: PORT_VAR, .. }
        ));
    }
}
