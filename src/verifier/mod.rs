//! Deployment verification: three independent checks against a deployed handle.
//!
//! Each check is its own reportable unit. A mismatch or a collaborator error in
//! one check is recorded and the suite moves on to the next; nothing here retries
//! or mutates the handle, so re-running the suite against the same handle yields
//! the same report.

pub mod checks;
pub mod report;

use crate::deployment::{ContractHandle, DeploymentProvider};
use crate::error::Result;
use serde::Serialize;

pub use checks::{verify_address, verify_name, verify_symbol, Expectation};
pub use report::{CheckOutcome, CheckResult, SuiteReport};

const CHECK_ERROR_MAX_LEN: usize = 260;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    Deploys,
    HasName,
    HasSymbol,
}

impl CheckId {
    /// Declaration order of the suite.
    pub const ALL: [CheckId; 3] = [CheckId::Deploys, CheckId::HasName, CheckId::HasSymbol];

    pub fn title(self) -> &'static str {
        match self {
            CheckId::Deploys => "deploys successfuly",
            CheckId::HasName => "has a name",
            CheckId::HasSymbol => "has a symbol",
        }
    }
}

fn errored(err: impl std::fmt::Display) -> CheckOutcome {
    CheckOutcome::Errored {
        error: crate::utils::error::compact_error_message(&err.to_string(), CHECK_ERROR_MAX_LEN),
    }
}

fn outcome_of(verdict: std::result::Result<(), crate::error::AssertionMismatch>) -> CheckOutcome {
    match verdict {
        Ok(()) => CheckOutcome::Passed,
        Err(mismatch) => CheckOutcome::Failed { mismatch },
    }
}

pub async fn run_check(
    handle: &dyn ContractHandle,
    check: CheckId,
    expectation: &Expectation,
) -> CheckOutcome {
    match check {
        CheckId::Deploys => outcome_of(verify_address(&handle.address())),
        CheckId::HasName => match handle.name().await {
            Ok(name) => outcome_of(verify_name(&name, expectation)),
            Err(err) => errored(err),
        },
        CheckId::HasSymbol => match handle.symbol().await {
            Ok(symbol) => outcome_of(verify_symbol(&symbol, expectation)),
            Err(err) => errored(err),
        },
    }
}

pub async fn run_suite(handle: &dyn ContractHandle, expectation: &Expectation) -> SuiteReport {
    let mut results = Vec::with_capacity(CheckId::ALL.len());
    for check in CheckId::ALL {
        let outcome = run_check(handle, check, expectation).await;
        match &outcome {
            CheckOutcome::Passed => tracing::info!("[VERIFY] ✓ {}", check.title()),
            CheckOutcome::Failed { mismatch } => {
                tracing::warn!("[VERIFY] ✗ {}: {}", check.title(), mismatch.message)
            }
            CheckOutcome::Errored { error } => {
                tracing::warn!("[VERIFY] ✗ {} (error): {}", check.title(), error)
            }
        }
        results.push(CheckResult {
            check,
            title: check.title(),
            outcome,
        });
    }
    SuiteReport::from_results(results)
}

/// Obtains the deployed handle once, then runs the suite against it.
///
/// Deployment failures belong to the collaborator and are returned as errors
/// rather than folded into the report.
pub async fn verify_deployment(
    provider: &dyn DeploymentProvider,
    expectation: &Expectation,
) -> Result<SuiteReport> {
    let handle = provider.deployed().await?;
    tracing::info!(
        "[VERIFY] Deployed handle obtained (address={:?})",
        handle.address().as_str()
    );
    Ok(run_suite(handle.as_ref(), expectation).await)
}
