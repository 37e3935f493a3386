//! Seams to the external deployment collaborator.
//!
//! The verifier only ever sees a [`ContractHandle`]; how the handle was produced
//! (Truffle artifact, explicit address, in-memory fixture) is the provider's concern.

pub mod artifact;
pub mod rpc;

use crate::error::Result;
use async_trait::async_trait;
use serde::Serialize;

pub use artifact::{NetworkDeployment, TruffleArtifact};
pub use rpc::{RpcContractHandle, RpcDeployment};

/// Address as reported by the deployment collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ObservedAddress {
    /// The collaborator reported no address at all (null or undefined).
    Missing,
    Raw(String),
}

impl ObservedAddress {
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Raw(value) => Some(value),
        }
    }
}

/// Read-only view of an already deployed contract instance.
#[async_trait]
pub trait ContractHandle: Send + Sync {
    fn address(&self) -> ObservedAddress;
    async fn name(&self) -> Result<String>;
    async fn symbol(&self) -> Result<String>;
}

#[async_trait]
pub trait DeploymentProvider: Send + Sync {
    async fn deployed(&self) -> Result<Box<dyn ContractHandle>>;
}
