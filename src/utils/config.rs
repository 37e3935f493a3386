use crate::error::{ConfigError, Result};
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ARTIFACT_PATH: &str = "build/contracts/KryptoBird.json";
pub const DEFAULT_RPC_CALL_TIMEOUT_MS: u64 = 1_500;
pub const DEFAULT_RPC_RETRIES: usize = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub eth_rpc_url: String,
    pub contract_address: Option<String>,
    pub artifact_path: PathBuf,
    pub network_id: Option<u64>,
    pub rpc_call_timeout_ms: u64,
    pub rpc_retries: usize,
}

fn validate_http_url(name: &str, raw: &str) -> Result<()> {
    let parsed = raw.parse::<reqwest::Url>().map_err(|e| {
        ConfigError::InvalidConfig(format!("{name} must be a valid URL, got `{raw}`: {e}"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidConfig(format!(
            "{name} must use http(s) scheme, got `{other}`"
        ))
        .into()),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_network_id(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        ConfigError::InvalidConfig(format!("NETWORK_ID must be a valid u64, got `{raw}`")).into()
    })
}

fn rpc_call_timeout_ms() -> u64 {
    env::var("RPC_CALL_TIMEOUT_MS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|v| (250..=20_000).contains(v))
        .unwrap_or(DEFAULT_RPC_CALL_TIMEOUT_MS)
}

fn rpc_retries() -> usize {
    env::var("RPC_RETRIES")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .map(|v| v.clamp(1, 10))
        .unwrap_or(DEFAULT_RPC_RETRIES)
}

/// Flag values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub rpc_url: Option<String>,
    pub contract_address: Option<String>,
    pub artifact_path: Option<PathBuf>,
    pub network_id: Option<String>,
}

impl Config {
    pub fn load_with(overrides: ConfigOverrides) -> Result<Self> {
        let eth_rpc_url = overrides
            .rpc_url
            .or_else(|| non_empty_var("ETH_RPC_URL"))
            .ok_or_else(|| ConfigError::MissingConfig("ETH_RPC_URL must be set".to_string()))?;
        validate_http_url("ETH_RPC_URL", &eth_rpc_url)?;

        let contract_address = overrides
            .contract_address
            .or_else(|| non_empty_var("CONTRACT_ADDRESS"));

        let artifact_path = overrides
            .artifact_path
            .or_else(|| non_empty_var("ARTIFACT_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACT_PATH));

        let network_id = match overrides.network_id.or_else(|| non_empty_var("NETWORK_ID")) {
            Some(raw) => Some(parse_network_id(&raw)?),
            None => None,
        };

        Ok(Self {
            eth_rpc_url,
            contract_address,
            artifact_path,
            network_id,
            rpc_call_timeout_ms: rpc_call_timeout_ms(),
            rpc_retries: rpc_retries(),
        })
    }

    /// Config pointed at an explicit endpoint, bypassing the environment.
    pub fn for_endpoint(eth_rpc_url: impl Into<String>) -> Self {
        Self {
            eth_rpc_url: eth_rpc_url.into(),
            contract_address: None,
            artifact_path: PathBuf::from(DEFAULT_ARTIFACT_PATH),
            network_id: None,
            rpc_call_timeout_ms: DEFAULT_RPC_CALL_TIMEOUT_MS,
            rpc_retries: DEFAULT_RPC_RETRIES,
        }
    }
}
