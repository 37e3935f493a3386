use crate::deployment::ObservedAddress;
use crate::error::AssertionMismatch;
use crate::utils::hex::coerces_to_zero;

/// Literal values the deployed instance must report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub name: String,
    pub symbol: String,
}

pub const KRYPTOBIRD_NAME: &str = "KryptoBird";
pub const KRYPTOBIRD_SYMBOL: &str = "KBIRDZ";

impl Expectation {
    pub fn kryptobird() -> Self {
        Self {
            name: KRYPTOBIRD_NAME.to_string(),
            symbol: KRYPTOBIRD_SYMBOL.to_string(),
        }
    }
}

impl Default for Expectation {
    fn default() -> Self {
        Self::kryptobird()
    }
}

fn address_mismatch(observed: Option<&str>, forbidden: &str) -> AssertionMismatch {
    let shown = observed.map_or_else(|| "null".to_string(), |s| format!("'{s}'"));
    AssertionMismatch::new(
        "address",
        observed.map(str::to_string),
        format!("not {forbidden}"),
        format!("expected address {shown} to not equal {forbidden}"),
    )
}

/// The address must not be empty, null, undefined or the zero sentinel.
pub fn verify_address(observed: &ObservedAddress) -> Result<(), AssertionMismatch> {
    let raw = match observed {
        ObservedAddress::Missing => {
            return Err(address_mismatch(None, "null/undefined"));
        }
        ObservedAddress::Raw(raw) => raw.as_str(),
    };
    if raw.is_empty() {
        return Err(address_mismatch(Some(raw), "''"));
    }
    if coerces_to_zero(raw) {
        return Err(address_mismatch(Some(raw), "0x0"));
    }
    Ok(())
}

fn verify_literal(property: &str, observed: &str, expected: &str) -> Result<(), AssertionMismatch> {
    if observed == expected {
        return Ok(());
    }
    Err(AssertionMismatch::new(
        property,
        Some(observed.to_string()),
        expected,
        format!("expected {property} '{observed}' to equal '{expected}'"),
    ))
}

pub fn verify_name(observed: &str, expectation: &Expectation) -> Result<(), AssertionMismatch> {
    verify_literal("name", observed, &expectation.name)
}

pub fn verify_symbol(observed: &str, expectation: &Expectation) -> Result<(), AssertionMismatch> {
    verify_literal("symbol", observed, &expectation.symbol)
}
