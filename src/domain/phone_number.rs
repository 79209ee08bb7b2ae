//! src/domain/phone_number.rs

use crate::domain::escaped_text::EscapedText;
use crate::domain::validation::{Field, ValidationError};

const PHONE_DIGITS: usize = 10;

/// A ten digit local number, without country code or separators.
#[derive(Debug, Clone)]
pub struct PhoneNumber(EscapedText);

impl PhoneNumber {
    pub fn parse(s: &str) -> Result<PhoneNumber, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::MissingField(Field::Phone));
        }

        let is_ten_digits =
            trimmed.len() == PHONE_DIGITS && trimmed.bytes().all(|b| b.is_ascii_digit());
        if !is_ten_digits {
            return Err(ValidationError::InvalidFormat(Field::Phone));
        }

        Ok(Self(EscapedText::escape(trimmed)))
    }

    pub fn escaped(&self) -> &EscapedText {
        &self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use claim::assert_ok;
    use quickcheck::{Arbitrary, Gen};

    use super::PhoneNumber;
    use crate::domain::validation::{Field, ValidationError};

    #[derive(Debug, Clone)]
    struct TenDigitNumber(String);

    impl Arbitrary for TenDigitNumber {
        fn arbitrary<G: Gen>(g: &mut G) -> Self {
            let n = u64::arbitrary(g) % 10_000_000_000;
            Self(format!("{:010}", n))
        }
    }

    #[quickcheck_macros::quickcheck]
    fn ten_digit_numbers_are_parsed_successfully(phone: TenDigitNumber) -> bool {
        PhoneNumber::parse(&phone.0).is_ok()
    }

    #[quickcheck_macros::quickcheck]
    fn anything_but_ten_digits_is_rejected(s: String) -> bool {
        let trimmed = s.trim();
        if trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return true;
        }
        PhoneNumber::parse(&s).is_err()
    }

    #[test]
    fn empty_phone_is_missing() {
        assert_eq!(
            PhoneNumber::parse("  ").unwrap_err(),
            ValidationError::MissingField(Field::Phone)
        );
    }

    #[test]
    fn malformed_numbers_are_invalid() {
        let cases = [
            "987654321",
            "98765432100",
            "98765 43210",
            "98765-43210",
            "+919876543210",
            "abcdefghij",
            "٩٨٧٦٥٤٣٢١٠",
        ];
        for phone in cases {
            assert_eq!(
                PhoneNumber::parse(phone).unwrap_err(),
                ValidationError::InvalidFormat(Field::Phone),
                "{} should have been rejected",
                phone,
            );
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let phone = assert_ok!(PhoneNumber::parse(" 9876543210 "));
        assert_eq!(phone.as_ref(), "9876543210");
    }
}
