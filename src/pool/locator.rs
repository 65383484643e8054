// DUCO-S1 Miner - Free and Open Source Software Statement
//
// This project, ducos1-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/pool/locator.rs
// Version: 1.0.0
//
// This file resolves which pool a worker connects to: either a static
// address or one fetched from the discovery endpoint, with bounded retries
// and a fallback address.
//
// Tree Location:
// - src/pool/locator.rs (pool discovery)
// - Depends on: reqwest, serde, tokio

use crate::error::LocatorError;
use crate::utils::user_agent::browser_user_agent;
use log::{error, info, warn};
use serde::Deserialize;
use std::time::Duration;

const LOG_TARGET: &str = "ducos1::pool::locator";

/// Split `HOST:PORT` on the last colon.
pub fn parse_pool_address(address: &str) -> Option<(String, u16)> {
    let (host, port) = address.trim().rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    let port = port.parse::<u16>().ok()?;
    Some((host.to_string(), port))
}

/// Body returned by the discovery endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PoolInfo {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
}

impl PoolInfo {
    /// Address and port, when the response reports success and carries both.
    pub fn endpoint(&self) -> Option<(String, u16)> {
        match (self.success, &self.ip, self.port) {
            (true, Some(ip), Some(port)) if !ip.is_empty() => Some((ip.clone(), port)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub url: String,
    pub retries: u32,
    pub retry_delay: Duration,
    pub fallback_host: String,
    pub fallback_port: u16,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            url: "https://server.duinocoin.com/getPool".to_string(),
            retries: 5,
            retry_delay: Duration::from_secs(15),
            fallback_host: "server.duinocoin.com".to_string(),
            fallback_port: 2813,
        }
    }
}

/// Discovers a pool over HTTP
#[derive(Debug, Clone)]
pub struct PoolLocator {
    config: LocatorConfig,
    http: reqwest::Client,
}

impl PoolLocator {
    pub fn new(config: LocatorConfig) -> Result<Self, LocatorError> {
        let http = reqwest::Client::builder()
            .user_agent(browser_user_agent())
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Always yields an address: a discovered one, or the fallback.
    pub async fn locate(&self) -> (String, u16) {
        for attempt in 1..=self.config.retries {
            match self.fetch_pool().await {
                Ok((host, port)) => {
                    info!(target: LOG_TARGET, "Discovered pool {}:{}", host, port);
                    return (host, port);
                }
                Err(e) => {
                    warn!(target: LOG_TARGET,
                        "Pool discovery attempt {}/{} failed: {}, retrying in {:?}",
                        attempt, self.config.retries, e, self.config.retry_delay
                    );
                    tokio::time::sleep(self.config.retry_delay).await;
                }
            }
        }

        error!(target: LOG_TARGET,
            "Failed to discover a pool after {} attempts, using {}:{}",
            self.config.retries, self.config.fallback_host, self.config.fallback_port
        );
        (self.config.fallback_host.clone(), self.config.fallback_port)
    }

    async fn fetch_pool(&self) -> Result<(String, u16), LocatorError> {
        let response = self.http.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocatorError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let info: PoolInfo = serde_json::from_str(&text)?;
        info.endpoint().ok_or(LocatorError::Unsuccessful)
    }
}

/// Where a worker connects.
#[derive(Debug, Clone)]
pub enum PoolEndpoint {
    Static { host: String, port: u16 },
    Discovery(PoolLocator),
}

impl PoolEndpoint {
    pub async fn resolve(&self) -> (String, u16) {
        match self {
            PoolEndpoint::Static { host, port } => (host.clone(), *port),
            PoolEndpoint::Discovery(locator) => locator.locate().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pool_address() {
        assert_eq!(parse_pool_address("127.0.0.1:2811"), Some(("127.0.0.1".to_string(), 2811)));
        assert_eq!(
            parse_pool_address("server.duinocoin.com:2813"),
            Some(("server.duinocoin.com".to_string(), 2813))
        );
        assert_eq!(parse_pool_address("no-port"), None);
        assert_eq!(parse_pool_address(":2811"), None);
        assert_eq!(parse_pool_address("host:99999"), None);
    }

    #[test]
    fn test_pool_info_endpoint() {
        let ok: PoolInfo = serde_json::from_str(r#"{"success":true,"ip":"1.2.3.4","port":2811,"name":"x"}"#).unwrap();
        assert_eq!(ok.endpoint(), Some(("1.2.3.4".to_string(), 2811)));

        let failed: PoolInfo = serde_json::from_str(r#"{"success":false,"message":"busy"}"#).unwrap();
        assert_eq!(failed.endpoint(), None);

        let missing_port: PoolInfo = serde_json::from_str(r#"{"success":true,"ip":"1.2.3.4"}"#).unwrap();
        assert_eq!(missing_port.endpoint(), None);
    }
}
