//! Groups and alternation.

use crate::pattern::{GroupBody, GroupKind, GroupToken, Token};

/// A capturing group around the tokens: `(...)`. Without tokens the group
/// renders as nothing.
pub fn define(tokens: impl IntoIterator<Item = Token>) -> GroupToken {
    GroupToken::new(GroupKind::Captured, GroupBody::Sequence(tokens.into_iter().collect()))
}

/// A non-capturing group around the tokens: `(?:...)`.
pub fn non_captured(tokens: impl IntoIterator<Item = Token>) -> GroupToken {
    define(tokens).non_captured()
}

/// Matches any one of the tokens, tried left to right: `(?:a|b|c)`.
///
/// A single token is wrapped in a plain non-capturing group. Call
/// [`GroupToken::captured`] or [`GroupToken::with_name`] on the result to
/// capture the matched alternative.
pub fn composite(tokens: impl IntoIterator<Item = Token>) -> GroupToken {
    let tokens: Vec<Token> = tokens.into_iter().collect();
    let body = if tokens.len() <= 1 {
        GroupBody::Sequence(tokens)
    } else {
        GroupBody::Alternation(tokens)
    };
    GroupToken::new(GroupKind::NonCaptured, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chars::{any, single};
    use crate::tokens;

    #[test]
    fn define_groups() {
        assert_eq!(define(tokens![any()]).to_string(), "(.)");
        assert_eq!(define(tokens![single('a'), single('b'), single('c')]).to_string(), "(abc)");
        assert_eq!(define(tokens![]).to_string(), "");
        assert_eq!(define(tokens![]).repeat().one_or_more().to_string(), "");
    }

    #[test]
    fn group_kinds() {
        assert_eq!(non_captured(tokens![single('a')]).to_string(), "(?:a)");
        assert_eq!(define(tokens![single('a')]).non_captured().to_string(), "(?:a)");
        assert_eq!(define(tokens![single('a')]).with_name("my_name").to_string(), "(?P<my_name>a)");
        assert_eq!(
            define(tokens![single('a')]).with_name("my_name").captured().to_string(),
            "(a)"
        );
    }

    #[test]
    fn repeated_groups() {
        assert_eq!(define(tokens![single('a')]).repeat().one_or_more().to_string(), "(a)+");
        assert_eq!(
            define(tokens![single('a')]).non_captured().repeat().zero_or_more().to_string(),
            "(?:a)*"
        );
    }

    #[test]
    fn composite_groups() {
        assert_eq!(composite(tokens![any()]).to_string(), "(?:.)");
        assert_eq!(
            composite(tokens![single('a'), single('b'), single('c')]).to_string(),
            "(?:a|b|c)"
        );
        assert_eq!(composite(tokens![]).to_string(), "");
        assert_eq!(
            composite(tokens![single('a'), single('b')]).captured().to_string(),
            "(a|b)"
        );
    }

    #[test]
    fn composite_keeps_precedence() {
        let token = crate::Rex::new(tokens![
            single('x'),
            composite(tokens![crate::common::text("ab"), crate::common::text("cd")]),
            single('y'),
        ]);
        let re = token.compile().unwrap();
        assert!(re.is_match("xaby"));
        assert!(re.is_match("xcdy"));
        assert!(!re.is_match("xay"));
    }
}
