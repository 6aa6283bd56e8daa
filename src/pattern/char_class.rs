//! Rendering of character classes and single characters.

use std::fmt::{self, Write};

use super::ast::{ClassItem, ClassToken};

/// Write `ch` so that it matches itself both inside and outside brackets.
///
/// Printable ASCII goes through [`regex::escape`]; `-` and everything else
/// is written as a hex escape (`\x2D`, `\x80`, `\x{1EDF}`).
pub fn write_char<W: Write>(out: &mut W, ch: char) -> fmt::Result {
    let code = u32::from(ch);
    if (' '..='~').contains(&ch) && ch != '-' {
        out.write_str(&regex::escape(ch.encode_utf8(&mut [0; 4])))
    } else if code <= 0xFF {
        write!(out, "\\x{code:02X}")
    } else {
        write!(out, "\\x{{{code:X}}}")
    }
}

impl fmt::Display for ClassItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassItem::Single(ch) => write_char(f, *ch),
            ClassItem::Range(lo, hi) => {
                write_char(f, *lo)?;
                f.write_char('-')?;
                write_char(f, *hi)
            }
            ClassItem::Posix(class) => write!(f, "[:{}:]", class.name()),
            ClassItem::Unicode(name) => write!(f, "\\p{{{name}}}"),
            ClassItem::Any => f.write_char('.'),
            ClassItem::Raw(syntax) => f.write_str(syntax),
        }
    }
}

impl fmt::Display for ClassToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return Ok(());
        }
        // Negation needs brackets to be expressible at all.
        let brackets = self.bracketed || self.negated;
        if brackets {
            f.write_char('[')?;
            if self.negated {
                f.write_char('^')?;
            }
        }
        for item in &self.items {
            write!(f, "{item}")?;
        }
        if brackets {
            f.write_char(']')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::ast::PosixClass;

    fn bare(item: ClassItem) -> String {
        ClassToken::bare(item).to_string()
    }

    fn escaped(ch: char) -> String {
        let mut out = String::new();
        write_char(&mut out, ch).unwrap();
        out
    }

    #[test]
    fn plain_ascii_is_written_as_is() {
        assert_eq!(escaped('a'), "a");
        assert_eq!(escaped('Z'), "Z");
        assert_eq!(escaped('7'), "7");
        assert_eq!(escaped(' '), " ");
    }

    #[test]
    fn metacharacters_are_escaped() {
        for (ch, expected) in [('.', r"\."), ('[', r"\["), (']', r"\]"), ('^', r"\^"), ('$', r"\$")] {
            assert_eq!(escaped(ch), expected, "escaping {ch:?}");
        }
    }

    #[test]
    fn minus_is_hex_escaped() {
        assert_eq!(escaped('-'), r"\x2D");
    }

    #[test]
    fn non_ascii_is_hex_escaped() {
        assert_eq!(escaped('\u{80}'), r"\x80");
        assert_eq!(escaped('\t'), r"\x09");
        assert_eq!(escaped('ở'), r"\x{1EDF}");
    }

    #[test]
    fn range_item() {
        let class = ClassToken::bracketed(vec![ClassItem::Range('A', 'Z')]);
        assert_eq!(class.to_string(), "[A-Z]");
    }

    #[test]
    fn posix_item_needs_brackets() {
        let class = ClassToken::bracketed(vec![ClassItem::Posix(PosixClass::Xdigit)]);
        assert_eq!(class.to_string(), "[[:xdigit:]]");
    }

    #[test]
    fn unicode_and_any() {
        assert_eq!(bare(ClassItem::Unicode("Greek".to_string())), r"\p{Greek}");
        assert_eq!(bare(ClassItem::Any), ".");
    }

    #[test]
    fn negated_class() {
        let class = ClassToken {
            items: vec![ClassItem::Single('a'), ClassItem::Single('b')],
            negated: true,
            bracketed: false,
        };
        assert_eq!(class.to_string(), "[^ab]");
    }

    #[test]
    fn empty_class_renders_nothing() {
        assert_eq!(ClassToken::bracketed(vec![]).to_string(), "");
    }
}
