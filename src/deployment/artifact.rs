use crate::error::{DeploymentError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The slice of a Truffle build artifact that records where a contract lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TruffleArtifact {
    #[serde(default)]
    pub contract_name: Option<String>,
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkDeployment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDeployment {
    #[serde(default)]
    pub address: Option<String>,
}

impl TruffleArtifact {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| DeploymentError::ArtifactIo {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Self::parse(raw, "<inline>")
    }

    fn parse(raw: &str, origin: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| {
            DeploymentError::ArtifactParse {
                path: origin.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn address_for(&self, network_id: u64) -> Option<&str> {
        self.networks
            .get(&network_id.to_string())
            .and_then(|entry| entry.address.as_deref())
    }

    /// The only recorded deployment, when the artifact has exactly one network entry.
    pub fn sole_deployment(&self) -> Option<(&str, &str)> {
        if self.networks.len() != 1 {
            return None;
        }
        let (network, entry) = self.networks.iter().next()?;
        entry
            .address
            .as_deref()
            .map(|address| (network.as_str(), address))
    }

    pub fn known_networks(&self) -> Vec<&str> {
        self.networks.keys().map(String::as_str).collect()
    }
}
