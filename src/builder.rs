//! Concatenation of tokens into a compilable pattern.

use std::fmt;

use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use crate::error::Error;
use crate::pattern::Token;

/// A rendered pattern, ready to compile.
///
/// ```
/// use rex::{Rex, chars, common, tokens};
///
/// let rex = Rex::new(tokens![chars::begin(), common::text("a.b"), chars::end()]);
/// assert_eq!(rex.as_str(), r"^a\.b$");
/// assert!(rex.compile().unwrap().is_match("a.b"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rex {
    expr: String,
}

impl Rex {
    /// Renders the tokens one after another.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            expr: tokens.into_iter().join(""),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.expr
    }

    pub fn compile(&self) -> Result<Regex, Error> {
        debug!(pattern = %self.expr, "compiling pattern");
        Ok(Regex::new(&self.expr)?)
    }

    /// Like [`compile`](Self::compile), for patterns known to be valid.
    ///
    /// # Panics
    ///
    /// Panics with the compile error if the pattern is invalid.
    pub fn must_compile(&self) -> Regex {
        match self.compile() {
            Ok(re) => re,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Rex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expr)
    }
}
