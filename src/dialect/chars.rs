//! Character classes and assertions.
//!
//! Named classes use the POSIX ASCII forms so that they match ASCII only,
//! whatever Unicode mode the compiled expression runs in.

use crate::pattern::{ClassItem, ClassToken, PosixClass, Token};

fn posix(class: PosixClass) -> ClassToken {
    ClassToken::bracketed(vec![ClassItem::Posix(class)])
}

/// ASCII digits.
///
/// Regex: `[0-9]`.
pub fn digits() -> ClassToken {
    ClassToken::bracketed(vec![ClassItem::Range('0', '9')])
}

/// Digits and ASCII letters, `[0-9A-Za-z]`.
///
/// Regex: `[[:alnum:]]`.
pub fn alphanumeric() -> ClassToken {
    posix(PosixClass::Alnum)
}

/// ASCII letters, `[A-Za-z]`.
///
/// Regex: `[[:alpha:]]`.
pub fn alphabetic() -> ClassToken {
    posix(PosixClass::Alpha)
}

/// `[\x00-\x7F]`.
///
/// Regex: `[[:ascii:]]`.
pub fn ascii() -> ClassToken {
    posix(PosixClass::Ascii)
}

/// ASCII whitespace, `[\t\n\v\f\r ]`.
///
/// Regex: `[[:space:]]`.
pub fn whitespace() -> ClassToken {
    posix(PosixClass::Space)
}

/// `[0-9A-Za-z_]`.
///
/// Regex: `[[:word:]]`.
pub fn word_character() -> ClassToken {
    posix(PosixClass::Word)
}

/// `[\t ]`.
///
/// Regex: `[[:blank:]]`.
pub fn blank() -> ClassToken {
    posix(PosixClass::Blank)
}

/// `[\x00-\x1F\x7F]`.
///
/// Regex: `[[:cntrl:]]`.
pub fn control() -> ClassToken {
    posix(PosixClass::Cntrl)
}

/// Visible ASCII characters, `[!-~]`.
///
/// Regex: `[[:graph:]]`.
pub fn graphical() -> ClassToken {
    posix(PosixClass::Graph)
}

/// Regex: `[[:lower:]]`.
pub fn lower() -> ClassToken {
    posix(PosixClass::Lower)
}

/// Visible ASCII characters and space, `[ -~]`.
///
/// Regex: `[[:print:]]`.
pub fn printable() -> ClassToken {
    posix(PosixClass::Print)
}

/// ``[!-/:-@\[-`{-~]``.
///
/// Regex: `[[:punct:]]`.
pub fn punctuation() -> ClassToken {
    posix(PosixClass::Punct)
}

/// Regex: `[[:upper:]]`.
pub fn upper() -> ClassToken {
    posix(PosixClass::Upper)
}

/// `[0-9A-Fa-f]`.
///
/// Regex: `[[:xdigit:]]`.
pub fn hex_digits() -> ClassToken {
    posix(PosixClass::Xdigit)
}

/// Any character except a newline, unless the `s` flag is set.
/// Inside a class it stands for a literal dot.
///
/// Regex: `.`.
pub fn any() -> ClassToken {
    ClassToken::bare(ClassItem::Any)
}

/// A single character. Anything outside printable ASCII, and `-`, is written
/// as a hex escape.
///
/// Regex: `a`, `\.`, `\xHH` or `\x{HHHH}`.
pub fn single(ch: char) -> ClassToken {
    ClassToken::bare(ClassItem::Single(ch))
}

/// A class of the given characters. One character yields [`single`].
///
/// ```
/// use rex::chars;
///
/// assert_eq!(chars::runes("ab").to_string(), "[ab]");
/// assert_eq!(chars::runes("a").to_string(), "a");
/// ```
pub fn runes(chars: &str) -> ClassToken {
    let items: Vec<ClassItem> = chars.chars().map(ClassItem::Single).collect();
    if items.len() <= 1 {
        ClassToken {
            items,
            negated: false,
            bracketed: false,
        }
    } else {
        ClassToken::bracketed(items)
    }
}

/// An inclusive range of characters. The bounds are not validated; equal
/// bounds collapse to [`single`].
///
/// Regex: `[a-z]`.
pub fn range(from: char, to: char) -> ClassToken {
    if from == to {
        return single(from);
    }
    ClassToken::bracketed(vec![ClassItem::Range(from, to)])
}

/// A Unicode general category or script, by name. The name is not validated.
///
/// Regex: `\p{Greek}`.
pub fn unicode_by_name(name: &str) -> ClassToken {
    ClassToken::bare(ClassItem::Unicode(name.to_string()))
}

/// Beginning of text, or of a line with the `m` flag.
///
/// Regex: `^`.
pub fn begin() -> Token {
    Token::Raw("^".to_string())
}

/// Beginning of text regardless of flags.
///
/// Regex: `\A`.
pub fn begin_of_text() -> Token {
    Token::Raw(r"\A".to_string())
}

/// End of text, or of a line with the `m` flag.
///
/// Regex: `$`.
pub fn end() -> Token {
    Token::Raw("$".to_string())
}

/// End of text regardless of flags.
///
/// Regex: `\z`.
pub fn end_of_text() -> Token {
    Token::Raw(r"\z".to_string())
}

/// A word boundary.
///
/// Regex: `\b`.
pub fn word_boundary() -> Token {
    Token::Raw(r"\b".to_string())
}
