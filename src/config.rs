//! Runtime configuration read from the environment
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by `dotenvy` before [`Config::from_env`] is called.

use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "url_shortener=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind (`HOST`)
    pub host: String,

    /// Port to listen on (`PORT`)
    pub port: u16,

    /// `tracing_subscriber` filter directive (`RUST_LOG`)
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Builds the configuration from `HOST`, `PORT` and `RUST_LOG`
    ///
    /// Missing variables fall back to the defaults. An unparsable `PORT` also
    /// falls back; [`Config::port_fallback`] reports it once logging is up.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("PORT")
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let log_filter = lookup("RUST_LOG")
            .filter(|filter| !filter.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            host,
            port,
            log_filter,
        }
    }

    /// Returns the raw `PORT` value when it was set but could not be parsed
    pub fn port_fallback() -> Option<String> {
        env::var("PORT")
            .ok()
            .filter(|port| port.parse::<u16>().is_err())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("RUST_LOG", "info"),
        ]);

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn invalid_port_falls_back() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
