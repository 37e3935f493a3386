use thiserror::Error;

pub type Result<T> = std::result::Result<T, VerifyError>;

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("network error: {0}")]
    Net(#[from] RpcError),
    #[error("deployment error: {0}")]
    Deployment(#[from] DeploymentError),
    #[error("assertion failed: {0}")]
    Assertion(#[from] AssertionMismatch),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration: {0}")]
    MissingConfig(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to decode `{method}` return data: {reason}")]
    Decode { method: String, reason: String },
}

#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("failed to read artifact `{path}`: {reason}")]
    ArtifactIo { path: String, reason: String },
    #[error("failed to parse artifact `{path}`: {reason}")]
    ArtifactParse { path: String, reason: String },
    #[error("{contract} has not been deployed to detected network ({network})")]
    NotDeployed { contract: String, network: String },
    #[error("recorded address `{raw}` is not a valid 20-byte address: {reason}")]
    InvalidAddress { raw: String, reason: String },
    #[error("no contract code at {address}")]
    NoCode { address: String },
}

/// An observed value disagreed with its expected literal.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("{message}")]
pub struct AssertionMismatch {
    pub property: String,
    pub observed: Option<String>,
    pub expected: String,
    pub message: String,
}

impl AssertionMismatch {
    pub fn new(
        property: impl Into<String>,
        observed: Option<String>,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            property: property.into(),
            observed,
            expected: expected.into(),
            message: message.into(),
        }
    }
}
