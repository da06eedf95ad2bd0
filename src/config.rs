use std::{
    env,
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use anyhow::Context;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub otlp_endpoint: Option<String>,
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            otlp_endpoint: None,
            seed_file: None,
        }
    }
}

impl Config {
    /// Read configuration from the process environment, loading `.env` first if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port,
            otlp_endpoint: var("OTEL_EXPORTER_OTLP_ENDPOINT"),
            seed_file: var("PEOPLE_SEED_FILE").map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .with_context(|| format!("HOST must be an IP address, got {:?}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() -> anyhow::Result<()> {
        let cfg = Config::from_lookup(lookup(&[]))?;
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.bind_addr()?.port(), 3000);
        Ok(())
    }

    #[test]
    fn reads_overrides() -> anyhow::Result<()> {
        let cfg = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317"),
            ("PEOPLE_SEED_FILE", "seed.json"),
        ]))?;
        assert_eq!(cfg.bind_addr()?.to_string(), "127.0.0.1:8081");
        assert_eq!(cfg.otlp_endpoint.as_deref(), Some("http://localhost:4317"));
        assert_eq!(cfg.seed_file, Some(PathBuf::from("seed.json")));

        let v6 = Config::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "8081")]))?;
        assert_eq!(v6.bind_addr()?.to_string(), "[::1]:8081");
        Ok(())
    }

    #[test]
    fn blank_values_fall_back() -> anyhow::Result<()> {
        let cfg = Config::from_lookup(lookup(&[("PORT", " "), ("OTEL_EXPORTER_OTLP_ENDPOINT", "")]))?;
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.otlp_endpoint, None);
        Ok(())
    }

    #[test]
    fn rejects_non_ip_host() -> anyhow::Result<()> {
        let cfg = Config::from_lookup(lookup(&[("HOST", "localhost:80")]))?;
        assert!(cfg.bind_addr().is_err());
        Ok(())
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PORT", "70000")])).is_err());
    }
}
