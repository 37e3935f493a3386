//! KryptoBird deployment verifier library surface.
//!
//! The verifier (`verifier`) is collaborator-agnostic: it checks whatever
//! `deployment::ContractHandle` it is given. `deployment::RpcDeployment` is the
//! EVM JSON-RPC collaborator used by the `kryptobird-verify` binary.

pub mod deployment;
pub mod error;
pub mod utils;
pub mod verifier;

pub use deployment::{ContractHandle, DeploymentProvider, ObservedAddress};
pub use error::{AssertionMismatch, Result, VerifyError};
pub use verifier::{run_suite, verify_deployment, CheckId, CheckOutcome, Expectation, SuiteReport};
