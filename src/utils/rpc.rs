use crate::error::{Result, RpcError};
use crate::utils::config::Config;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes};
use alloy::providers::{Provider, ProviderBuilder, RootProvider};
use alloy::rpc::types::eth::TransactionRequest;
use alloy::transports::http::Http;
use reqwest::Client;
use tokio::time::{sleep, timeout, Duration};

pub struct RobustRpc;

pub type HttpProvider = RootProvider<Http<Client>>;

const RPC_ERR_MAX_LEN: usize = 260;
const RETRY_BACKOFF_BASE_MS: u64 = 100;
const RETRY_BACKOFF_CAP_MS: u64 = 1_800;

/// Per-call timeout and attempt budget applied to every JSON-RPC request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: usize,
    pub timeout_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            retries: config.rpc_retries,
            timeout_ms: config.rpc_call_timeout_ms,
        }
    }
}

pub fn build_http_provider(rpc_url: &str) -> Result<HttpProvider> {
    let trimmed = rpc_url.trim();
    let parsed = trimmed
        .parse::<reqwest::Url>()
        .map_err(|err| RpcError::InvalidUrl {
            url: trimmed.to_string(),
            reason: err.to_string(),
        })?;
    Ok(ProviderBuilder::new().on_http(parsed))
}

fn retry_backoff_ms(attempt: usize) -> u64 {
    bounded_exponential_backoff_ms(
        RETRY_BACKOFF_BASE_MS,
        attempt.saturating_sub(1) as u32,
        RETRY_BACKOFF_CAP_MS,
    )
}

pub fn bounded_exponential_backoff_ms(base_ms: u64, streak: u32, cap_ms: u64) -> u64 {
    if base_ms == 0 {
        return 0;
    }
    let clamped = streak.min(8);
    base_ms
        .saturating_mul(1u64 << clamped)
        .min(cap_ms.max(base_ms))
}

fn is_retryable_rpc_error(message: &str) -> bool {
    let msg = message.to_ascii_lowercase();
    let non_retryable = [
        "method not found",
        "-32601",
        "invalid params",
        "-32602",
        "execution reverted",
        "revert",
        "parse error",
        "-32700",
    ];
    !non_retryable.iter().any(|needle| msg.contains(needle))
}

pub fn compact_rpc_error_message(message: &str) -> String {
    crate::utils::error::compact_error_message(message, RPC_ERR_MAX_LEN)
}

pub async fn run_with_retry<T, Op, Fut>(
    policy: RetryPolicy,
    context: &str,
    mut op: Op,
) -> anyhow::Result<T>
where
    Op: FnMut() -> Fut,
    Fut: std::future::Future<Output = anyhow::Result<T>>,
{
    let max_attempts = policy.retries.max(1);
    let mut last_message = String::new();

    for attempt in 1..=max_attempts {
        match timeout(Duration::from_millis(policy.timeout_ms), op()).await {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) => {
                let message = compact_rpc_error_message(&err.to_string());
                if !is_retryable_rpc_error(&message) || attempt == max_attempts {
                    return Err(anyhow::anyhow!(
                        "{} failed on attempt {}/{}: {}",
                        context,
                        attempt,
                        max_attempts,
                        message
                    ));
                }
                last_message = message;
            }
            Err(_) => {
                last_message = format!("timed out after {}ms", policy.timeout_ms);
                if attempt == max_attempts {
                    break;
                }
            }
        }

        tracing::debug!(
            "[RPC] {} attempt {}/{} failed: {}",
            context,
            attempt,
            max_attempts,
            last_message
        );
        sleep(Duration::from_millis(retry_backoff_ms(attempt))).await;
    }

    Err(anyhow::anyhow!(
        "{} failed after {} attempt(s): {}",
        context,
        max_attempts,
        last_message
    ))
}

impl RobustRpc {
    pub async fn get_chain_id_with_retry(
        provider: &HttpProvider,
        policy: RetryPolicy,
    ) -> anyhow::Result<u64> {
        run_with_retry(policy, "eth_chainId", || async move {
            provider.get_chain_id().await.map_err(anyhow::Error::from)
        })
        .await
    }

    pub async fn get_code_with_retry(
        provider: &HttpProvider,
        address: Address,
        policy: RetryPolicy,
    ) -> anyhow::Result<Bytes> {
        run_with_retry(policy, &format!("eth_getCode({address:#x})"), || async move {
            provider
                .get_code_at(address)
                .await
                .map_err(anyhow::Error::from)
        })
        .await
    }

    pub async fn eth_call_with_retry(
        provider: &HttpProvider,
        to: Address,
        input: Bytes,
        policy: RetryPolicy,
    ) -> anyhow::Result<Bytes> {
        let request = TransactionRequest::default().with_to(to).with_input(input);
        let request = &request;
        run_with_retry(policy, &format!("eth_call(to={to:#x})"), || async move {
            provider.call(request).await.map_err(anyhow::Error::from)
        })
        .await
    }
}
