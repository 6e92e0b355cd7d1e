use anyhow::{bail, Context};
use std::net::SocketAddr;

const BIND_ADDR_VAR: &str = "GATEWAY_BIND_ADDR";
const RATE_LIMIT_CAPACITY_VAR: &str = "GATEWAY_RATE_LIMIT_CAPACITY";
const RATE_LIMIT_REFILL_VAR: &str = "GATEWAY_RATE_LIMIT_REFILL_PER_SEC";
const RATE_LIMIT_MAX_CLIENTS_VAR: &str = "GATEWAY_RATE_LIMIT_MAX_CLIENTS";
const LOG_FILTER_VAR: &str = "GATEWAY_LOG_FILTER";

/// Gateway runtime configuration, read once at startup
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Burst size of each client's token bucket
    pub rate_limit_capacity: u32,
    /// Tokens restored per second
    pub rate_limit_refill_per_sec: f64,
    /// Upper bound on tracked client buckets
    pub rate_limit_max_clients: usize,
    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            rate_limit_capacity: 60,
            rate_limit_refill_per_sec: 1.0,
            rate_limit_max_clients: 10_000,
            log_filter: "gateway=info,tower_http=info".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(BIND_ADDR_VAR) {
            config.bind_addr = raw
                .parse()
                .with_context(|| format!("invalid {}: {}", BIND_ADDR_VAR, raw))?;
        }
        if let Some(raw) = lookup(RATE_LIMIT_CAPACITY_VAR) {
            config.rate_limit_capacity = raw
                .parse()
                .with_context(|| format!("invalid {}: {}", RATE_LIMIT_CAPACITY_VAR, raw))?;
        }
        if let Some(raw) = lookup(RATE_LIMIT_REFILL_VAR) {
            config.rate_limit_refill_per_sec = raw
                .parse()
                .with_context(|| format!("invalid {}: {}", RATE_LIMIT_REFILL_VAR, raw))?;
        }
        if let Some(raw) = lookup(RATE_LIMIT_MAX_CLIENTS_VAR) {
            config.rate_limit_max_clients = raw
                .parse()
                .with_context(|| format!("invalid {}: {}", RATE_LIMIT_MAX_CLIENTS_VAR, raw))?;
        }
        if let Some(raw) = lookup(LOG_FILTER_VAR) {
            config.log_filter = raw;
        }

        if config.rate_limit_capacity == 0 {
            bail!("{} must be at least 1", RATE_LIMIT_CAPACITY_VAR);
        }
        if !(config.rate_limit_refill_per_sec.is_finite() && config.rate_limit_refill_per_sec > 0.0)
        {
            bail!("{} must be a positive number", RATE_LIMIT_REFILL_VAR);
        }
        if config.rate_limit_max_clients == 0 {
            bail!("{} must be at least 1", RATE_LIMIT_MAX_CLIENTS_VAR);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = GatewayConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.rate_limit_capacity, 60);
        assert_eq!(config.rate_limit_max_clients, 10_000);
        assert_eq!(config.log_filter, "gateway=info,tower_http=info");
    }

    #[test]
    fn test_overrides_from_env() {
        let config = GatewayConfig::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:9000"),
            (RATE_LIMIT_CAPACITY_VAR, "5"),
            (RATE_LIMIT_REFILL_VAR, "0.5"),
            (RATE_LIMIT_MAX_CLIENTS_VAR, "500"),
            (LOG_FILTER_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.rate_limit_capacity, 5);
        assert_eq!(config.rate_limit_refill_per_sec, 0.5);
        assert_eq!(config.rate_limit_max_clients, 500);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_malformed_values() {
        let err = GatewayConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "nowhere")])).unwrap_err();
        assert!(err.to_string().contains(BIND_ADDR_VAR));

        assert!(GatewayConfig::from_lookup(lookup(&[(RATE_LIMIT_CAPACITY_VAR, "0")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[(RATE_LIMIT_REFILL_VAR, "-1")])).is_err());
        assert!(GatewayConfig::from_lookup(lookup(&[(RATE_LIMIT_MAX_CLIENTS_VAR, "0")])).is_err());
    }
}
