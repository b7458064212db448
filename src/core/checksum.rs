use super::error::ParseError;

/// Compute the GS1 mod-10 check digit for a payload.
///
/// Digits are weighted 3, 1, 3, 1, ... starting from the least significant
/// digit, so the result does not depend on how many leading zeros the code
/// had. Works for any GS1 width (UPC-A, EAN-13, EAN-8, GTIN-14).
pub fn check_digit(payload: u64) -> u8 {
    let mut n = payload;
    let mut sum = 0u64;
    let mut multiplier = 3u64;
    while n > 0 {
        sum += multiplier * (n % 10);
        n /= 10;
        multiplier = 4 - multiplier;
    }
    ((10 - sum % 10) % 10) as u8
}

/// Split a fixed-width digit string into its payload and asserted check digit.
///
/// `width` is the full code width including the check digit. Length is
/// checked before content, so `"$19.99"` against width 12 is `TooShort`.
/// The check digit is not verified here; see [`validate`].
pub fn parse_digits(input: &str, width: usize) -> Result<(u64, u8), ParseError> {
    let found = input.chars().count();
    if found < width {
        return Err(ParseError::TooShort {
            expected: width,
            found,
        });
    }
    if found > width {
        return Err(ParseError::TooLong {
            expected: width,
            found,
        });
    }

    let mut payload = 0u64;
    let mut check = 0u8;
    for (position, character) in input.chars().enumerate() {
        let Some(digit) = character.to_digit(10) else {
            return Err(ParseError::InvalidDigit {
                character,
                position,
            });
        };
        if position == width - 1 {
            check = digit as u8;
        } else {
            payload = payload * 10 + u64::from(digit);
        }
    }
    Ok((payload, check))
}

/// Parse a fixed-width digit string and verify its check digit.
///
/// Returns the payload (everything except the trailing check digit).
pub fn validate(input: &str, width: usize) -> Result<u64, ParseError> {
    let (payload, found) = parse_digits(input, width)?;
    let expected = check_digit(payload);
    if expected != found {
        return Err(ParseError::InvalidCheckDigit { expected, found });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_check_digits() {
        assert_eq!(check_digit(4549683043), 4);
        assert_eq!(check_digit(36382405736), 1);
        assert_eq!(check_digit(51234567890), 0);
        assert_eq!(check_digit(454967359060), 0);
    }

    #[test]
    fn zero_payload() {
        assert_eq!(check_digit(0), 0);
    }

    #[test]
    fn leading_zeros_ignored() {
        let (payload, check) = parse_digits("000000000017", 12).unwrap();
        assert_eq!(payload, 1);
        assert_eq!(check, 7);
        assert_eq!(check_digit(1), 7);
    }

    #[test]
    fn length_checked_before_digits() {
        assert_eq!(
            parse_digits("$19.99", 12),
            Err(ParseError::TooShort {
                expected: 12,
                found: 6
            })
        );
        assert_eq!(
            parse_digits("0123456789123x", 13),
            Err(ParseError::TooLong {
                expected: 13,
                found: 14
            })
        );
    }

    #[test]
    fn multibyte_character_is_invalid_digit() {
        assert_eq!(
            parse_digits("01234567890é", 12),
            Err(ParseError::InvalidDigit {
                character: 'é',
                position: 11
            })
        );
    }

    #[test]
    fn non_ascii_digits_rejected() {
        // Arabic-Indic digit three
        assert!(matches!(
            parse_digits("01234567890\u{0663}", 12),
            Err(ParseError::InvalidDigit { position: 11, .. })
        ));
    }

    #[test]
    fn check_digit_mismatch() {
        assert_eq!(
            validate("012345678919", 12),
            Err(ParseError::InvalidCheckDigit {
                expected: 2,
                found: 9
            })
        );
        assert_eq!(validate("012345678912", 12), Ok(1234567891));
    }
}
