use crate::config::limits::MAX_COUNT;

// ============================================================================
// Bounded Fibonacci Term Iterator
// ============================================================================

/// Lazy iterator over the Fibonacci terms that fit in an `i64`.
///
/// Seeded with $F(0) = 0$ and $F(1) = 1$. Each step is a single checked
/// addition of the two previous terms; the iterator ends instead of wrapping
/// once the next term would leave the `i64` range, so it yields exactly
/// [`MAX_COUNT`] terms.
///
/// # Example
/// ```
/// use fibweb_core::FibTerms;
///
/// let first_five: Vec<i64> = FibTerms::new().take(5).collect();
/// assert_eq!(first_five, vec![0, 1, 1, 2, 3]);
///
/// assert_eq!(FibTerms::new().count(), 93);
/// ```
#[derive(Debug, Clone)]
pub struct FibTerms {
    current: Option<i64>,
    next: Option<i64>,
    position: u64,
}

impl FibTerms {
    /// Creates an iterator starting at $F(0)$.
    pub fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
            position: 0,
        }
    }

    /// Returns the index of the term the next call to `.next()` will yield.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }
}

impl Default for FibTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibTerms {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;

        // F(n+2) = F(n) + F(n+1), or None once it no longer fits
        let new_next = self.next.and_then(|next| result.checked_add(next));
        self.current = std::mem::replace(&mut self.next, new_next);
        self.position += 1;

        Some(result)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (MAX_COUNT as u64).saturating_sub(self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FibTerms {}

impl std::iter::FusedIterator for FibTerms {}
