use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use valuation_rules::{RulesError, Thresholds};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(transparent)]
    Thresholds(#[from] RulesError),
}

#[derive(Debug)]
pub struct Config {
    pub workers: usize,
    pub bind: String,
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub thresholds: Thresholds,
}

impl Config {
    pub fn new() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_url = lookup("DASHBOARD_UPSTREAM_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DASHBOARD_UPSTREAM_URL"))?;

        let mut workers: usize = parse_var(&lookup, "DASHBOARD_WORKERS", 1)?;
        if workers == 0 {
            workers = 1;
        }

        let bind = lookup("DASHBOARD_BIND")
            .map(|bind| bind.trim().to_string())
            .filter(|bind| !bind.is_empty())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "DASHBOARD_PORT", 8080)?;
        let timeout_secs = parse_var(&lookup, "DASHBOARD_UPSTREAM_TIMEOUT_SECS", 30)?;

        let default = Thresholds::default();
        let thresholds = Thresholds::new(
            parse_var(&lookup, "DASHBOARD_FAVORABLE_MAX", default.favorable_max())?,
            parse_var(&lookup, "DASHBOARD_CAUTION_MAX", default.caution_max())?,
        )?;

        Ok(Config {
            workers,
            bind,
            port,
            upstream_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            thresholds,
        })
    }
}

// unset and blank both fall back to the default
fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::Invalid { name, value })
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn config_pass_defaults() {
        let config = config(&[("DASHBOARD_UPSTREAM_URL", "http://api.local")]).unwrap();
        assert_eq!(config.workers, 1);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url, "http://api.local");
        assert_eq!(config.upstream_timeout, Duration::from_secs(30));
        assert_eq!(config.thresholds, Thresholds::DISCOUNT);
    }

    #[test]
    fn config_pass_overrides() {
        let config = config(&[
            ("DASHBOARD_UPSTREAM_URL", "http://api.local"),
            ("DASHBOARD_WORKERS", "0"),
            ("DASHBOARD_PORT", "9000"),
            ("DASHBOARD_FAVORABLE_MAX", "0.5"),
            ("DASHBOARD_CAUTION_MAX", " "),
        ])
        .unwrap();
        assert_eq!(config.workers, 1);
        assert_eq!(config.port, 9000);
        assert_eq!(config.thresholds, Thresholds::EARLY);
    }

    #[test]
    fn config_fail_missing_upstream() {
        let err = config(&[("DASHBOARD_UPSTREAM_URL", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DASHBOARD_UPSTREAM_URL")));
    }

    #[test]
    fn config_fail_invalid_values() {
        let err = config(&[
            ("DASHBOARD_UPSTREAM_URL", "http://api.local"),
            ("DASHBOARD_WORKERS", "many"),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid value for DASHBOARD_WORKERS: many");

        let err = config(&[
            ("DASHBOARD_UPSTREAM_URL", "http://api.local"),
            ("DASHBOARD_FAVORABLE_MAX", "2"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::Thresholds(_)));
    }
}
