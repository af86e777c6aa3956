//! Rail platform code type.

use std::fmt;

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid rail platform code.
///
/// Platform codes are always one uppercase ASCII letter followed by two
/// ASCII digits (`A01`, `C05`, `K08`). Logical stations with two
/// platforms have two distinct codes, linked through the reference
/// feed's sibling-platform field. This type guarantees that any
/// `StationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationCode;
///
/// let metro_center = StationCode::parse("A01").unwrap();
/// assert_eq!(metro_center.as_str(), "A01");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("a01").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("A1").is_err());
/// assert!(StationCode::parse("A011").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StationCode([u8; 3]);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be exactly one uppercase ASCII letter followed by
    /// two ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidStationCode {
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() {
            return Err(InvalidStationCode {
                reason: "must start with an uppercase ASCII letter",
            });
        }

        if !bytes[1].is_ascii_digit() || !bytes[2].is_ascii_digit() {
            return Err(InvalidStationCode {
                reason: "must end with two ASCII digits",
            });
        }

        Ok(StationCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a station code, uppercasing the input first.
    ///
    /// The reference feed is uppercase throughout, but hand-entered
    /// codes often arrive lowercased.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("A01").is_ok());
        assert!(StationCode::parse("B35").is_ok());
        assert!(StationCode::parse("C05").is_ok());
        assert!(StationCode::parse("K08").is_ok());
        assert!(StationCode::parse("N06").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("a01").is_err());
        assert!(StationCode::parse("k08").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("A").is_err());
        assert!(StationCode::parse("A0").is_err());
        assert!(StationCode::parse("A011").is_err());
    }

    #[test]
    fn reject_wrong_shape() {
        assert!(StationCode::parse("0A1").is_err());
        assert!(StationCode::parse("AB1").is_err());
        assert!(StationCode::parse("A1B").is_err());
        assert!(StationCode::parse("AAA").is_err());
        assert!(StationCode::parse("111").is_err());
    }

    #[test]
    fn parse_normalized_uppercases() {
        assert_eq!(
            StationCode::parse_normalized("a01").unwrap(),
            StationCode::parse("A01").unwrap()
        );
        assert_eq!(
            StationCode::parse_normalized(" c05 ").unwrap(),
            StationCode::parse("C05").unwrap()
        );
    }

    #[test]
    fn as_str_roundtrip() {
        let code = StationCode::parse("A01").unwrap();
        assert_eq!(code.as_str(), "A01");
    }

    #[test]
    fn display() {
        let code = StationCode::parse("B35").unwrap();
        assert_eq!(format!("{}", code), "B35");
    }

    #[test]
    fn debug() {
        let code = StationCode::parse("K08").unwrap();
        assert_eq!(format!("{:?}", code), "StationCode(K08)");
    }

    #[test]
    fn equality() {
        let a = StationCode::parse("A01").unwrap();
        let b = StationCode::parse("A01").unwrap();
        let c = StationCode::parse("C01").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("A01").unwrap());
        assert!(set.contains(&StationCode::parse("A01").unwrap()));
        assert!(!set.contains(&StationCode::parse("C01").unwrap()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station codes: letter + 2 digits
    fn valid_code_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z][0-9]{2}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_code_string()) {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Any valid code can be parsed
        #[test]
        fn valid_always_parses(s in valid_code_string()) {
            prop_assert!(StationCode::parse(&s).is_ok());
        }

        /// parse_normalized accepts lowercased valid codes
        #[test]
        fn normalized_accepts_lowercase(s in valid_code_string()) {
            prop_assert!(StationCode::parse_normalized(&s.to_ascii_lowercase()).is_ok());
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z0-9]{0,2}|[A-Z0-9]{4,8}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// All-letter strings are rejected
        #[test]
        fn all_letters_rejected(s in "[A-Z]{3}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
