//! Builder functions over the token tree, grouped by concern.
//!
//! - [`chars`]: character classes and assertions.
//! - [`common`]: literal text, raw syntax and class composition.
//! - [`group`]: groups and alternation.
//! - [`helper`]: ready-made patterns (numeric ranges, hosts, phones, hashes).

pub mod chars;
pub mod common;
pub mod group;
pub mod helper;

/// Collects classes, groups and plain tokens into a `Vec<Token>`.
///
/// ```
/// use rex::{chars, common, tokens};
///
/// let tokens = tokens![chars::begin(), common::text("id-"), chars::digits()];
/// assert_eq!(tokens.len(), 3);
/// ```
#[macro_export]
macro_rules! tokens {
    () => {
        ::std::vec::Vec::<$crate::Token>::new()
    };
    ($($token:expr),+ $(,)?) => {
        ::std::vec![$($crate::Token::from($token)),*]
    };
}
