//! Composable regular expressions, with patterns for numeric ranges.
//!
//! Patterns are assembled from small builders grouped in [`chars`],
//! [`common`], [`group`] and [`helper`], then rendered and compiled with the
//! [`regex`] crate through [`Rex`].
//!
//! # Example
//!
//! ```rust
//! use rex::{Rex, chars, common, group, helper, tokens};
//!
//! // A percentage from 0 to 100, with an optional fraction.
//! let re = Rex::new(tokens![
//!     chars::begin(),
//!     helper::number_range(0, 100),
//!     group::non_captured(tokens![
//!         chars::single('.'),
//!         chars::digits().repeat().one_or_more(),
//!     ])
//!     .repeat()
//!     .zero_or_one(),
//!     common::text("%"),
//!     chars::end(),
//! ])
//! .must_compile();
//!
//! assert!(re.is_match("42%"));
//! assert!(re.is_match("99.5%"));
//! assert!(!re.is_match("101%"));
//! assert!(!re.is_match("042%"));
//! ```

mod builder;
mod dialect;
mod error;
pub mod generator;
pub mod pattern;

pub use builder::Rex;
pub use dialect::{chars, common, group, helper};
pub use error::Error;
pub use pattern::{ClassToken, GroupToken, Token};
