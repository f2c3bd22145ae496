//! Field validators shared by the domain records.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

static PIVA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(IT)?([0-9]{11})$").expect("valid regex"));
static CAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("valid regex"));

fn errore(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects empty and whitespace-only strings.
pub fn non_vuoto(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(errore("required", "Il campo è obbligatorio"));
    }
    Ok(())
}

pub fn non_negativo(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(errore("range", "Il valore non può essere negativo"));
    }
    Ok(())
}

/// Italian VAT number: eleven digits, the last one a check digit.
/// An `IT` prefix is accepted.
pub fn validate_piva(value: &str) -> Result<(), ValidationError> {
    let normalized = value.trim().to_ascii_uppercase();
    let caps = PIVA_RE
        .captures(&normalized)
        .ok_or_else(|| errore("piva", "La partita IVA deve avere 11 cifre"))?;

    let digits: Vec<u32> = caps[2].chars().filter_map(|c| c.to_digit(10)).collect();
    let sum: u32 = digits[..10]
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                d
            } else {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            }
        })
        .sum();

    if (10 - sum % 10) % 10 != digits[10] {
        return Err(errore("piva", "Cifra di controllo della partita IVA non valida"));
    }
    Ok(())
}

pub fn validate_cap(value: &str) -> Result<(), ValidationError> {
    if !CAP_RE.is_match(value.trim()) {
        return Err(errore("cap", "Il CAP deve avere 5 cifre"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("12345678903")]
    #[case("01234567897")]
    #[case("IT12345678903")]
    #[case(" it01234567897 ")]
    fn accepts_valid_vat_numbers(#[case] piva: &str) {
        assert!(validate_piva(piva).is_ok(), "{piva} should be valid");
    }

    #[rstest]
    #[case("")]
    #[case("1234567890")]
    #[case("12345678901")]
    #[case("1234567890A")]
    #[case("DE12345678903")]
    fn rejects_invalid_vat_numbers(#[case] piva: &str) {
        assert!(validate_piva(piva).is_err(), "{piva} should be rejected");
    }

    #[test]
    fn blank_strings_are_not_accepted() {
        assert!(non_vuoto("   ").is_err());
        assert!(non_vuoto("CART01").is_ok());
    }

    #[test]
    fn zero_price_is_not_negative() {
        assert!(non_negativo(&dec!(0)).is_ok());
        assert!(non_negativo(&dec!(-0.00)).is_ok());
        assert!(non_negativo(&dec!(12.50)).is_ok());
        assert!(non_negativo(&dec!(-0.01)).is_err());
    }

    #[test]
    fn postal_code_has_five_digits() {
        assert!(validate_cap("20100").is_ok());
        assert!(validate_cap("2010").is_err());
    }
}
