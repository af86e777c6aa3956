//! Bus stop identifier type.

use std::fmt;

/// Upper bound on stop id length. Regional stop ids are at most seven
/// digits; anything longer is garbage input, not a stop.
const MAX_DIGITS: usize = 7;

/// Error returned when sanitizing an invalid stop id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// A bus stop identifier: a non-empty string of ASCII digits.
///
/// Stop ids are exact external identifiers, so there is no name
/// matching on the bus path. Spoken queries arrive noisy, though
/// ("stop number 3004-076", "stop #17"), so construction goes through
/// [`StopId::sanitize`], which keeps only the digits.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StopId;
///
/// let id = StopId::sanitize("stop #3004-076").unwrap();
/// assert_eq!(id.as_str(), "3004076");
///
/// assert!(StopId::sanitize("no digits here").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Build a stop id from free text, keeping only ASCII digits.
    ///
    /// Fails when no digits survive, or when the result is longer than
    /// any real stop id.
    pub fn sanitize(raw: &str) -> Result<Self, InvalidStopId> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.is_empty() {
            return Err(InvalidStopId {
                reason: "contains no digits",
            });
        }

        if digits.len() > MAX_DIGITS {
            return Err(InvalidStopId {
                reason: "too many digits for a stop id",
            });
        }

        Ok(StopId(digits))
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_plain_digits() {
        assert_eq!(StopId::sanitize("1001234").unwrap().as_str(), "1001234");
        assert_eq!(StopId::sanitize("17").unwrap().as_str(), "17");
    }

    #[test]
    fn sanitize_strips_noise() {
        assert_eq!(
            StopId::sanitize("stop #3004-076").unwrap().as_str(),
            "3004076"
        );
        assert_eq!(
            StopId::sanitize("stop number 10, please").unwrap().as_str(),
            "10"
        );
        assert_eq!(StopId::sanitize(" 30 04 076 ").unwrap().as_str(), "3004076");
    }

    #[test]
    fn sanitize_rejects_digitless_input() {
        assert!(StopId::sanitize("").is_err());
        assert!(StopId::sanitize("metro center").is_err());
        assert!(StopId::sanitize("#-- ").is_err());
    }

    #[test]
    fn sanitize_rejects_overlong_input() {
        assert!(StopId::sanitize("123456789").is_err());
    }

    #[test]
    fn display() {
        let id = StopId::sanitize("3004076").unwrap();
        assert_eq!(format!("{}", id), "3004076");
        assert_eq!(format!("{:?}", id), "StopId(3004076)");
    }
}
