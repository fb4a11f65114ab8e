//! # fibweb Core
//!
//! Fibonacci sequence generation and request-count validation, with no I/O.
//!
//! ## Components
//!
//! - **Generator** ([`fibonacci_sequence`]): the first `n` terms, seeded with
//!   0 and 1, as a [`Sequence`] that prints as `[0 1 1 2 3]`.
//! - **Terms** ([`FibTerms`]): a lazy iterator over every Fibonacci term that
//!   fits in an `i64` (93 of them).
//! - **Validation** ([`Count`]): parses raw input and enforces
//!   $1 \le n \le 93$, reporting failures as [`CountError`].
//!
//! ## Usage
//!
//! ```rust
//! use fibweb_core::{Count, CountError};
//!
//! match Count::parse(Some("5")) {
//!     Ok(count) => assert_eq!(count.sequence().to_string(), "[0 1 1 2 3]"),
//!     Err(e) => panic!("unexpected: {}", e),
//! }
//!
//! assert!(matches!(Count::parse(Some("94")), Err(CountError::Overflow { .. })));
//! ```

pub mod config;
pub mod iterators;
pub mod sequence;
pub mod types;

pub use config::limits::MAX_COUNT;
pub use iterators::FibTerms;
pub use sequence::{fibonacci_sequence, Sequence};
pub use types::{Count, CountError};
