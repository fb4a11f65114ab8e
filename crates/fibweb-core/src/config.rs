//! Limits applied to incoming counts.
//!
//! Centralized here so the validator, the generator tests and the server all
//! agree on the same boundary.

/// Input limits for sequence requests.
pub mod limits {
    /// Largest count whose terms all fit in an `i64`.
    ///
    /// The 93rd term is $F(92) = 7,540,113,804,746,346,429$. The 94th term,
    /// $F(93) \approx 1.22 \times 10^{19}$, exceeds `i64::MAX`.
    ///
    /// Kept as a literal; `FibTerms` is checked against it in tests.
    pub const MAX_COUNT: i64 = 93;

    /// Smallest accepted count.
    pub const MIN_COUNT: i64 = 1;
}
