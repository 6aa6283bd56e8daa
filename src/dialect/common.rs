//! Literal text, raw syntax and character class composition.

use crate::pattern::{ClassItem, ClassToken, Token};

use super::chars;

/// Literal text; every metacharacter is escaped.
pub fn text(text: &str) -> Token {
    Token::Text(text.to_string())
}

/// Pattern syntax appended as is.
pub fn raw(syntax: &str) -> Token {
    Token::Raw(syntax.to_string())
}

/// Pattern syntax with comments and layout removed.
///
/// On every line, a `#` that is neither escaped nor inside a character class
/// starts a comment running to the end of the line. Each line is then trimmed
/// and the lines are joined without separators.
///
/// ```
/// use rex::common;
///
/// let token = common::raw_verbose(
///     r"
///     [0-9]+   # integer part
///     (\.[0-9]+)?  # fraction
///     ",
/// );
/// assert_eq!(token.to_string(), r"[0-9]+(\.[0-9]+)?");
/// ```
pub fn raw_verbose(syntax: &str) -> Token {
    Token::Raw(syntax.lines().map(|line| strip_comment(line).trim()).collect())
}

fn strip_comment(line: &str) -> &str {
    let mut escaped = false;
    let mut class_depth = 0usize;
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '[' => class_depth += 1,
            ']' if class_depth > 0 => class_depth -= 1,
            '#' if class_depth == 0 => return &line[..idx],
            _ => {}
        }
    }
    line
}

/// Same as [`chars::single`].
pub fn single(ch: char) -> ClassToken {
    chars::single(ch)
}

/// A class of all the given classes.
///
/// Nested classes are flattened into one bracket: `class([range('A', 'Z'),
/// single('0')])` renders `[A-Z0]`. A negated nested class keeps its own
/// brackets.
pub fn class(classes: impl IntoIterator<Item = ClassToken>) -> ClassToken {
    ClassToken::bracketed(flatten(classes))
}

/// A class of everything except the given classes.
///
/// Regex: `[^...]`.
pub fn not_class(classes: impl IntoIterator<Item = ClassToken>) -> ClassToken {
    ClassToken {
        negated: true,
        ..class(classes)
    }
}

fn flatten(classes: impl IntoIterator<Item = ClassToken>) -> Vec<ClassItem> {
    let mut items = Vec::new();
    for class in classes {
        if class.negated {
            if !class.items.is_empty() {
                items.push(ClassItem::Raw(class.to_string()));
            }
        } else {
            items.extend(class.items);
        }
    }
    items
}
