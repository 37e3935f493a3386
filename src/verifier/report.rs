use super::CheckId;
use crate::error::AssertionMismatch;
use serde::Serialize;
use std::fmt::Write as _;

pub const SUITE_TITLE: &str = "KryptoBird deployment";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed,
    Failed { mismatch: AssertionMismatch },
    /// The collaborator call behind the check failed before anything could be compared.
    Errored { error: String },
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub check: CheckId,
    pub title: &'static str,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    pub suite: &'static str,
    pub results: Vec<CheckResult>,
    pub passing: usize,
    pub failing: usize,
}

impl SuiteReport {
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let passing = results.iter().filter(|r| r.outcome.is_passed()).count();
        let failing = results.len() - passing;
        Self {
            suite: SUITE_TITLE,
            results,
            passing,
            failing,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failing == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn outcome(&self, check: CheckId) -> Option<&CheckOutcome> {
        self.results
            .iter()
            .find(|r| r.check == check)
            .map(|r| &r.outcome)
    }

    /// Spec-reporter style rendering: one line per check, failures detailed below.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.suite);
        for result in &self.results {
            let mark = if result.outcome.is_passed() { "✓" } else { "✗" };
            let _ = writeln!(out, "  {mark} {}", result.title);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "  {} passing", self.passing);
        if self.failing > 0 {
            let _ = writeln!(out, "  {} failing", self.failing);
        }

        let failures = self
            .results
            .iter()
            .filter(|r| !r.outcome.is_passed())
            .enumerate();
        for (idx, result) in failures {
            let detail = match &result.outcome {
                CheckOutcome::Failed { mismatch } => format!("AssertionError: {}", mismatch.message),
                CheckOutcome::Errored { error } => format!("Error: {error}"),
                CheckOutcome::Passed => continue,
            };
            let _ = writeln!(out);
            let _ = writeln!(out, "  {}) {} {}:", idx + 1, self.suite, result.title);
            let _ = writeln!(out, "     {detail}");
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
