use super::artifact::TruffleArtifact;
use super::{ContractHandle, DeploymentProvider, ObservedAddress};
use crate::error::{DeploymentError, Result, RpcError};
use crate::utils::config::Config;
use crate::utils::rpc::{build_http_provider, HttpProvider, RetryPolicy, RobustRpc};
use alloy::primitives::{Address, Bytes};
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

pub const CONTRACT_NAME: &str = "KryptoBird";

alloy::sol! {
    interface IERC721Metadata {
        function name() external view returns (string memory tokenName);
        function symbol() external view returns (string memory tokenSymbol);
    }
}

fn transport_error(err: anyhow::Error) -> RpcError {
    RpcError::Transport(crate::utils::rpc::compact_rpc_error_message(&err.to_string()))
}

fn parse_recorded_address(raw: &str) -> Result<Address> {
    Address::from_str(raw.trim()).map_err(|e| {
        DeploymentError::InvalidAddress {
            raw: raw.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Resolves the deployed instance over JSON-RPC, the way `Contract.deployed()`
/// does for a Truffle project.
pub struct RpcDeployment {
    provider: Arc<HttpProvider>,
    config: Config,
    policy: RetryPolicy,
}

impl RpcDeployment {
    pub fn new(config: Config) -> Result<Self> {
        let provider = build_http_provider(&config.eth_rpc_url)?;
        Ok(Self {
            provider: Arc::new(provider),
            policy: RetryPolicy::from_config(&config),
            config,
        })
    }

    async fn recorded_address(&self) -> Result<String> {
        if let Some(explicit) = self.config.contract_address.as_deref() {
            tracing::info!("[DEPLOY] Using CONTRACT_ADDRESS override {}", explicit);
            return Ok(explicit.to_string());
        }

        let artifact = TruffleArtifact::load(&self.config.artifact_path)?;
        let contract = artifact
            .contract_name
            .clone()
            .unwrap_or_else(|| CONTRACT_NAME.to_string());

        if let Some(network_id) = self.config.network_id {
            return artifact
                .address_for(network_id)
                .map(str::to_string)
                .ok_or_else(|| {
                    DeploymentError::NotDeployed {
                        contract,
                        network: network_id.to_string(),
                    }
                    .into()
                });
        }

        let chain_id = RobustRpc::get_chain_id_with_retry(&self.provider, self.policy)
            .await
            .map_err(transport_error)?;
        if let Some(address) = artifact.address_for(chain_id) {
            return Ok(address.to_string());
        }
        if let Some((network, address)) = artifact.sole_deployment() {
            tracing::warn!(
                "[DEPLOY] No {} entry for chain id {}; falling back to the only recorded network {}",
                contract,
                chain_id,
                network
            );
            return Ok(address.to_string());
        }

        Err(DeploymentError::NotDeployed {
            contract,
            network: format!(
                "chain id {chain_id}, recorded networks [{}]",
                artifact.known_networks().join(", ")
            ),
        }
        .into())
    }
}

#[async_trait]
impl DeploymentProvider for RpcDeployment {
    async fn deployed(&self) -> Result<Box<dyn ContractHandle>> {
        let raw = self.recorded_address().await?;
        let address = parse_recorded_address(&raw)?;

        // The zero address is handed to the verifier as-is so the address check reports it.
        if address != Address::ZERO {
            let code = RobustRpc::get_code_with_retry(&self.provider, address, self.policy)
                .await
                .map_err(transport_error)?;
            if code.is_empty() {
                return Err(DeploymentError::NoCode {
                    address: address.to_checksum(None),
                }
                .into());
            }
            tracing::info!(
                "[DEPLOY] {} resolved at {} ({} bytes of code)",
                CONTRACT_NAME,
                address.to_checksum(None),
                code.len()
            );
        }

        Ok(Box::new(RpcContractHandle::new(
            Arc::clone(&self.provider),
            address,
            self.policy,
        )))
    }
}

pub struct RpcContractHandle {
    provider: Arc<HttpProvider>,
    address: Address,
    policy: RetryPolicy,
}

impl RpcContractHandle {
    pub fn new(provider: Arc<HttpProvider>, address: Address, policy: RetryPolicy) -> Self {
        Self {
            provider,
            address,
            policy,
        }
    }

    async fn call_view(&self, input: Vec<u8>) -> Result<Bytes> {
        RobustRpc::eth_call_with_retry(&self.provider, self.address, Bytes::from(input), self.policy)
            .await
            .map_err(|err| transport_error(err).into())
    }
}

#[async_trait]
impl ContractHandle for RpcContractHandle {
    fn address(&self) -> ObservedAddress {
        ObservedAddress::Raw(self.address.to_checksum(None))
    }

    async fn name(&self) -> Result<String> {
        let raw = self
            .call_view(IERC721Metadata::nameCall {}.abi_encode())
            .await?;
        let decoded = <IERC721Metadata::nameCall as SolCall>::abi_decode_returns(raw.as_ref(), true)
            .map_err(|err| RpcError::Decode {
                method: "name()".to_string(),
                reason: err.to_string(),
            })?;
        Ok(decoded.tokenName)
    }

    async fn symbol(&self) -> Result<String> {
        let raw = self
            .call_view(IERC721Metadata::symbolCall {}.abi_encode())
            .await?;
        let decoded =
            <IERC721Metadata::symbolCall as SolCall>::abi_decode_returns(raw.as_ref(), true)
                .map_err(|err| RpcError::Decode {
                    method: "symbol()".to_string(),
                    reason: err.to_string(),
                })?;
        Ok(decoded.tokenSymbol)
    }
}
