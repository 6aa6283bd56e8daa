//! Serialization of a token tree into pattern text.

use std::fmt::{self, Write};

use itertools::Itertools;

use super::ast::{GroupBody, GroupKind, GroupToken, Quantifier, Token};

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(text) => f.write_str(&regex::escape(text)),
            Token::Raw(syntax) => f.write_str(syntax),
            Token::Class(class) => write!(f, "{class}"),
            Token::Group(group) => write!(f, "{group}"),
            Token::Repeated {
                token,
                quantifier,
                lazy,
            } => {
                // Nothing to repeat: `()+` and `[]*` are dropped entirely.
                if token.is_empty() {
                    return Ok(());
                }
                write!(f, "{token}{quantifier}")?;
                if *lazy {
                    f.write_char('?')?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for GroupToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.tokens().is_empty() {
            return Ok(());
        }
        f.write_char('(')?;
        match &self.kind {
            GroupKind::Captured => {}
            GroupKind::NonCaptured => f.write_str("?:")?,
            GroupKind::Named(name) => write!(f, "?P<{name}>")?,
        }
        match &self.body {
            GroupBody::Sequence(tokens) => {
                for token in tokens {
                    write!(f, "{token}")?;
                }
            }
            GroupBody::Alternation(tokens) => write!(f, "{}", tokens.iter().format("|"))?,
        }
        f.write_char(')')
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::ZeroOrMore => f.write_char('*'),
            Quantifier::OneOrMore => f.write_char('+'),
            Quantifier::ZeroOrOne => f.write_char('?'),
            Quantifier::AtLeast(n) => write!(f, "{{{n},}}"),
            Quantifier::Between(from, to) => write!(f, "{{{from},{to}}}"),
            Quantifier::Exactly(n) => write!(f, "{{{n}}}"),
        }
    }
}
