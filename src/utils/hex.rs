fn all_digits_in_radix(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

fn all_zero(digits: &str) -> bool {
    digits.chars().all(|c| c == '0')
}

/// Returns true when `raw` coerces to the number zero under loose numeric
/// comparison, e.g. `"0x0"`, `"0x000...000"`, `"0"`, `"-0.0"` or blank text.
///
/// Text that is not a well-formed number never coerces to zero. Decimal text
/// whose magnitude underflows a double (`"1e-400"`) does.
pub fn coerces_to_zero(raw: &str) -> bool {
    let s = raw.trim();
    if s.is_empty() {
        return true;
    }

    let lower = s.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lower.strip_prefix(prefix) {
            return all_digits_in_radix(digits, radix) && all_zero(digits);
        }
    }

    let unsigned = lower
        .strip_prefix('+')
        .or_else(|| lower.strip_prefix('-'))
        .unwrap_or(&lower);
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };
    if let Some(exp) = exponent {
        let exp_digits = exp
            .strip_prefix('+')
            .or_else(|| exp.strip_prefix('-'))
            .unwrap_or(exp);
        if !all_digits_in_radix(exp_digits, 10) {
            return false;
        }
    }
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    let int_ok = int_part.is_empty() || all_digits_in_radix(int_part, 10);
    let frac_ok = frac_part.is_empty() || all_digits_in_radix(frac_part, 10);
    if !(int_ok && frac_ok) {
        return false;
    }
    if all_zero(int_part) && all_zero(frac_part) {
        return true;
    }
    unsigned.parse::<f64>().map_or(false, |value| value == 0.0)
}

#[cfg(test)]
mod tests {
    use super::coerces_to_zero;

    #[test]
    fn test_zero_forms_coerce_to_zero() {
        for raw in [
            "0x0",
            "0x0000000000000000000000000000000000000000",
            "0X00",
            "0",
            "000",
            "-0",
            "0.0",
            ".0",
            "0e10",
            "0b0",
            "0o000",
            "",
            "   ",
            "\t0x0\n",
        ] {
            assert!(coerces_to_zero(raw), "`{raw}` should coerce to zero");
        }
    }

    #[test]
    fn test_non_zero_or_malformed_text_does_not_coerce_to_zero() {
        for raw in [
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "0x0000000000000000000000000000000000000001",
            "0x",
            "0xZZ",
            "1",
            "0.01",
            "null",
            "undefined",
            "KryptoBird",
            ".",
            "0e",
            "1e-5",
            "1e400",
        ] {
            assert!(!coerces_to_zero(raw), "`{raw}` should not coerce to zero");
        }
    }

    #[test]
    fn test_decimal_underflow_coerces_to_zero() {
        for raw in ["1e-400", "-2.5e-330", "0.000001e-320"] {
            assert!(coerces_to_zero(raw), "`{raw}` underflows to zero");
        }
        // Smallest subnormals are still non-zero.
        assert!(!coerces_to_zero("1e-323"));
        assert!(!coerces_to_zero("5e-324"));
    }
}
