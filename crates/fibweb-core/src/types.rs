use crate::config::limits::{MAX_COUNT, MIN_COUNT};
use crate::{fibonacci_sequence, Sequence};

/// Reasons a requested count is rejected.
///
/// The `Display` text is the user-facing message; the HTTP layer prefixes it
/// with `ERROR: `.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// The count was absent or not a valid 64-bit integer.
    #[error("Unable to retrieve COUNT input. Please try again.")]
    Unreadable,

    /// The count was zero or negative.
    #[error("Count must be > 0")]
    NotPositive { count: i64 },

    /// Some term of the requested sequence would not fit in an `i64`.
    #[error("This calculation would cause a 64bit integer overflow. Choose a value <= {max}")]
    Overflow { count: i64, max: i64 },
}

// ============================================================================
// Validated Count
// ============================================================================

/// A number of terms known to be in `MIN_COUNT..=MAX_COUNT`.
///
/// Only obtainable through [`Count::new`] or [`Count::parse`], so holding one
/// guarantees the generated sequence cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(i64);

impl Count {
    /// Validates an already-parsed count.
    ///
    /// # Errors
    /// * `CountError::NotPositive` if `count <= 0`.
    /// * `CountError::Overflow` if `count > MAX_COUNT`.
    pub fn new(count: i64) -> Result<Self, CountError> {
        if count < MIN_COUNT {
            return Err(CountError::NotPositive { count });
        }
        if count > MAX_COUNT {
            return Err(CountError::Overflow {
                count,
                max: MAX_COUNT,
            });
        }
        Ok(Count(count))
    }

    /// Parses and validates raw query input.
    ///
    /// Accepts an optional leading `+` or `-` followed by decimal digits.
    /// Whitespace, empty strings and values outside the `i64` range are
    /// treated the same as a missing value.
    ///
    /// # Example
    /// ```
    /// use fibweb_core::{Count, CountError};
    ///
    /// assert_eq!(Count::parse(Some("5")).map(|c| c.get()), Ok(5));
    /// assert_eq!(Count::parse(None), Err(CountError::Unreadable));
    /// assert_eq!(Count::parse(Some("0")), Err(CountError::NotPositive { count: 0 }));
    /// ```
    pub fn parse(raw: Option<&str>) -> Result<Self, CountError> {
        let count = raw
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or(CountError::Unreadable)?;
        Self::new(count)
    }

    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }

    /// Generates the sequence for this count.
    pub fn sequence(self) -> Sequence {
        fibonacci_sequence(self.0)
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_missing_or_garbage_is_unreadable() {
        for raw in [None, Some(""), Some("abc"), Some("5x"), Some(" 5"), Some("1.5")] {
            assert_eq!(Count::parse(raw), Err(CountError::Unreadable), "{:?}", raw);
        }
    }

    #[test]
    fn parse_out_of_i64_range_is_unreadable() {
        assert_eq!(
            Count::parse(Some("99999999999999999999")),
            Err(CountError::Unreadable)
        );
    }

    #[test]
    fn parse_accepts_signs() {
        assert_eq!(Count::parse(Some("+7")).map(Count::get), Ok(7));
        assert_eq!(
            Count::parse(Some("-1")),
            Err(CountError::NotPositive { count: -1 })
        );
    }

    #[test]
    fn boundaries() {
        assert_eq!(Count::new(0), Err(CountError::NotPositive { count: 0 }));
        assert_eq!(Count::new(1).map(Count::get), Ok(1));
        assert_eq!(Count::new(93).map(Count::get), Ok(93));
        assert_eq!(
            Count::new(94),
            Err(CountError::Overflow { count: 94, max: 93 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CountError::Unreadable.to_string(),
            "Unable to retrieve COUNT input. Please try again."
        );
        assert_eq!(
            CountError::NotPositive { count: -3 }.to_string(),
            "Count must be > 0"
        );
        assert_eq!(
            CountError::Overflow { count: 94, max: 93 }.to_string(),
            "This calculation would cause a 64bit integer overflow. Choose a value <= 93"
        );
    }

    #[test]
    fn count_generates_sequence_of_its_length() {
        let count = Count::new(12).unwrap();
        assert_eq!(count.sequence().len(), 12);
        assert_eq!(count.to_string(), "12");
    }
}
