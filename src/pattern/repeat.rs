//! Quantifier suffixes for classes and groups.

use super::ast::{Quantifier, Token};

/// A class or group waiting for its quantifier.
///
/// Obtained from [`ClassToken::repeat`](super::ClassToken::repeat) or
/// [`GroupToken::repeat`](super::GroupToken::repeat). Each method finishes the
/// repetition and yields a plain [`Token`]. Inputs are not validated:
/// `between(5, 2)` is passed through and rejected by the regex compiler.
#[derive(Debug, Clone)]
pub struct Repeat {
    token: Token,
}

impl Repeat {
    pub(crate) fn new(token: Token) -> Self {
        Self { token }
    }

    fn finish(self, quantifier: Quantifier, lazy: bool) -> Token {
        Token::Repeated {
            token: Box::new(self.token),
            quantifier,
            lazy,
        }
    }

    /// `*`
    pub fn zero_or_more(self) -> Token {
        self.finish(Quantifier::ZeroOrMore, false)
    }

    /// `*?`
    pub fn zero_or_more_prefer_fewer(self) -> Token {
        self.finish(Quantifier::ZeroOrMore, true)
    }

    /// `+`
    pub fn one_or_more(self) -> Token {
        self.finish(Quantifier::OneOrMore, false)
    }

    /// `+?`
    pub fn one_or_more_prefer_fewer(self) -> Token {
        self.finish(Quantifier::OneOrMore, true)
    }

    /// `?`
    pub fn zero_or_one(self) -> Token {
        self.finish(Quantifier::ZeroOrOne, false)
    }

    /// `??`
    pub fn zero_or_one_prefer_zero(self) -> Token {
        self.finish(Quantifier::ZeroOrOne, true)
    }

    /// `{n,}`
    pub fn at_least(self, n: usize) -> Token {
        self.finish(Quantifier::AtLeast(n), false)
    }

    /// `{n,}?`
    pub fn at_least_prefer_fewer(self, n: usize) -> Token {
        self.finish(Quantifier::AtLeast(n), true)
    }

    /// `{from,to}`
    pub fn between(self, from: usize, to: usize) -> Token {
        self.finish(Quantifier::Between(from, to), false)
    }

    /// `{from,to}?`
    pub fn between_prefer_fewer(self, from: usize, to: usize) -> Token {
        self.finish(Quantifier::Between(from, to), true)
    }

    /// `{n}`
    pub fn exactly(self, n: usize) -> Token {
        self.finish(Quantifier::Exactly(n), false)
    }
}
