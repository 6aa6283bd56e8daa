use crate::dialect::{chars, group};
use crate::pattern::Token;
use crate::tokens;

/// Either [`phone_e164`] or [`phone_e123`].
///
/// Matches `+15555555`, `(607) 123 4567` and `+22 607 123 4567`.
pub fn phone() -> Token {
    group::composite([phone_e164(), phone_e123()]).into()
}

/// An E.164 number: `+`, a country code not starting with zero, and a
/// subscriber number, 8 to 15 digits in total with no separators.
///
/// Example: `+15555555`.
pub fn phone_e164() -> Token {
    group::non_captured(tokens![
        chars::single('+'),
        chars::range('1', '9'),
        chars::digits().repeat().between(7, 14),
    ])
    .into()
}

/// Either notation of E.123.
pub fn phone_e123() -> Token {
    group::composite([phone_national_e123(), phone_international_e123()]).into()
}

/// The national E.123 notation in the US 3-3-4 layout, with the area code in
/// parentheses.
///
/// Example: `(607) 123 4567`.
pub fn phone_national_e123() -> Token {
    group::non_captured(tokens![
        chars::single('('),
        chars::digits().repeat().exactly(3),
        chars::single(')'),
        chars::whitespace(),
        chars::digits().repeat().exactly(3),
        chars::whitespace(),
        chars::digits().repeat().exactly(4),
    ])
    .into()
}

/// The international E.123 notation: `+`, a country code of one to three
/// digits, two groups of two or three digits and a final group of four, all
/// separated by single spaces.
///
/// Example: `+22 607 123 4567`.
pub fn phone_international_e123() -> Token {
    group::non_captured(tokens![
        chars::single('+'),
        chars::range('1', '9'),
        chars::digits().repeat().between(0, 2),
        chars::whitespace(),
        chars::digits().repeat().between(2, 3),
        chars::whitespace(),
        chars::digits().repeat().between(2, 3),
        chars::whitespace(),
        chars::digits().repeat().exactly(4),
    ])
    .into()
}
