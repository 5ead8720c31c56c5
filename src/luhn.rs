use tracing::debug;

use crate::error::ValidationError;

/// Compute the Luhn (modulus-10) checksum total for a digit-only string.
///
/// Digits are processed from the rightmost first. Digits at the 1st, 3rd,
/// 5th... position from the right are summed as-is; digits at the 2nd, 4th,
/// 6th... position are doubled, with 9 subtracted when the product reaches
/// two digits (same as summing the product's digits).
///
/// The number is well-formed iff the total is divisible by 10 — see
/// [`is_valid_luhn`]. Empty input and any non-digit character are rejected
/// up front rather than surfacing as a conversion failure mid-sum.
pub fn luhn_total(digits: &str) -> Result<u32, ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let mut values = Vec::with_capacity(digits.len());
    for (position, found) in digits.char_indices() {
        match found.to_digit(10) {
            Some(d) => values.push(d),
            None => return Err(ValidationError::InvalidInput { found, position }),
        }
    }

    let mut sum_odd = 0u32;
    let mut sum_even = 0u32;
    for (i, &d) in values.iter().rev().enumerate() {
        if i % 2 == 0 {
            sum_odd += d;
        } else {
            let doubled = d * 2;
            sum_even += if doubled > 9 { doubled - 9 } else { doubled };
        }
    }

    Ok(sum_odd + sum_even)
}

/// Check a digit-only card number against the Luhn rule.
///
/// Expects already-normalized input (see [`normalize`](crate::normalize())); separators
/// left in the string are reported as [`ValidationError::InvalidInput`].
/// The intermediate total is emitted at debug level for troubleshooting.
pub fn is_valid_luhn(digits: &str) -> Result<bool, ValidationError> {
    let total = luhn_total(digits)?;
    debug!(total, "luhn checksum total");
    Ok(total % 10 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_card_numbers() {
        assert_eq!(is_valid_luhn("4532015112830366"), Ok(true)); // Visa
        assert_eq!(is_valid_luhn("4111111111111111"), Ok(true)); // Visa test card
        assert_eq!(is_valid_luhn("5555555555554444"), Ok(true)); // Mastercard test card
    }

    #[test]
    fn test_invalid_card_numbers() {
        assert_eq!(is_valid_luhn("4111111111111112"), Ok(false)); // wrong check digit
        assert_eq!(is_valid_luhn("1234567890123456"), Ok(false));
    }

    #[test]
    fn test_single_digit() {
        // one digit means an empty doubled group: only 0 divides by 10
        assert_eq!(is_valid_luhn("0"), Ok(true));
        assert_eq!(is_valid_luhn("5"), Ok(false));
    }

    #[test]
    fn test_total_is_exposed() {
        assert_eq!(luhn_total("4111111145551141"), Ok(49));
        assert_eq!(luhn_total("4532015112830366"), Ok(50));
        assert_eq!(luhn_total("0"), Ok(0));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(luhn_total(""), Err(ValidationError::EmptyInput));
        assert_eq!(is_valid_luhn(""), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_non_digit_input_is_an_error() {
        assert_eq!(
            is_valid_luhn("4111a11111111111"),
            Err(ValidationError::InvalidInput {
                found: 'a',
                position: 4
            })
        );
        // separators are the normalizer's job, not ours
        assert_eq!(
            is_valid_luhn("4111-1111"),
            Err(ValidationError::InvalidInput {
                found: '-',
                position: 4
            })
        );
    }
}
