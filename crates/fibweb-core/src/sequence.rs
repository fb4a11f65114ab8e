//! Sequence generation.
//!
//! Produces the first `n` Fibonacci terms as a [`Sequence`], whose `Display`
//! output is the bracketed, space-separated form written in responses.

use std::fmt;

use crate::config::limits::MAX_COUNT;

/// An ordered list of Fibonacci terms, seeded with 0 and 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence(Vec<i64>);

impl Sequence {
    /// Borrows the terms in order.
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Number of terms.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the terms by reference.
    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.0.iter()
    }

    /// Consumes the sequence, returning the terms.
    pub fn into_vec(self) -> Vec<i64> {
        self.0
    }
}

impl FromIterator<i64> for Sequence {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `[0 1 1 2 3]`; an empty sequence renders as `[]`.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", term)?;
        }
        f.write_str("]")
    }
}

/// Returns the first `n` terms of the Fibonacci sequence.
///
/// - `n <= 0` gives an empty sequence.
/// - `n == 1` gives `[0]`, `n == 2` gives `[0 1]`.
/// - Larger `n` extends the seeds with the sum of the two previous terms.
///
/// Additions wrap on overflow. Callers are expected to keep `n` within
/// [`MAX_COUNT`], the largest count whose terms all fit in an `i64`.
///
/// # Example
/// ```
/// use fibweb_core::fibonacci_sequence;
///
/// let seq = fibonacci_sequence(5);
/// assert_eq!(seq.as_slice(), &[0, 1, 1, 2, 3]);
/// assert_eq!(seq.to_string(), "[0 1 1 2 3]");
/// ```
pub fn fibonacci_sequence(n: i64) -> Sequence {
    if n <= 0 {
        return Sequence::default();
    }
    let len = usize::try_from(n).unwrap_or(usize::MAX);

    let mut terms = Vec::with_capacity(len.min(MAX_COUNT as usize));
    let (mut current, mut next) = (0i64, 1i64);
    for _ in 0..len {
        terms.push(current);
        let new_next = current.wrapping_add(next);
        current = std::mem::replace(&mut next, new_next);
    }
    Sequence(terms)
}
