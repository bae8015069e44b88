use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tracing::Level;

use crate::error::{config_error, Error};

pub const DEFAULT_CITY: &str = "Delhi NCR";

/// Runtime settings, read from the environment after loading `.env`.
///
/// | variable                 | default     |
/// |--------------------------|-------------|
/// | `SAFEROUTE_HOST`         | `127.0.0.1` |
/// | `SAFEROUTE_PORT`         | `3000`      |
/// | `SAFEROUTE_DEFAULT_CITY` | `Delhi NCR` |
/// | `SAFEROUTE_LOG_LEVEL`    | `info`      |
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub default_city: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            default_city: DEFAULT_CITY.into(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let read = |key: &str| -> Result<Option<String>, Error> {
            match lookup(key) {
                Ok(value) if value.trim().is_empty() => Ok(None),
                Ok(value) => Ok(Some(value.trim().to_string())),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(err) => Err(err.into()),
            }
        };

        let mut config = Self::default();

        if let Some(host) = read("SAFEROUTE_HOST")? {
            config.host = host
                .parse()
                .map_err(|err| config_error("SAFEROUTE_HOST", err))?;
        }

        if let Some(port) = read("SAFEROUTE_PORT")? {
            config.port = port
                .parse()
                .map_err(|err| config_error("SAFEROUTE_PORT", err))?;
        }

        if let Some(city) = read("SAFEROUTE_DEFAULT_CITY")? {
            config.default_city = city;
        }

        if let Some(level) = read("SAFEROUTE_LOG_LEVEL")? {
            config.log_level = level
                .parse()
                .map_err(|err| config_error("SAFEROUTE_LOG_LEVEL", err))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SAFEROUTE_HOST", "0.0.0.0"),
            ("SAFEROUTE_PORT", "8080"),
            ("SAFEROUTE_DEFAULT_CITY", "Mumbai"),
            ("SAFEROUTE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.default_city, "Mumbai");
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("SAFEROUTE_PORT", "  ")])).unwrap();

        assert_eq!(config.port, 3000);
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup(&[("SAFEROUTE_PORT", "not-a-port")])).unwrap_err();

        assert_eq!(err.code, 2);
        assert!(err.message.contains("SAFEROUTE_PORT"));
    }
}
