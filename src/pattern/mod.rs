//! Token tree for composed regular expressions.
//!
//! Every pattern built through the dialect is a tree of [`Token`]s that renders
//! to `regex` syntax through [`Display`](std::fmt::Display).
//!
//! # Rendering
//!
//! | Token                         | Output                                   |
//! |-------------------------------|------------------------------------------|
//! | `Text("a.b")`                 | `a\.b`                                   |
//! | `Raw("a.b")`                  | `a.b`                                    |
//! | `Single('-')`                 | `\x2D`                                   |
//! | `Range('a', 'f')`             | `a-f`                                    |
//! | `Posix(Xdigit)`               | `[:xdigit:]` (bracketed: `[[:xdigit:]]`) |
//! | `Unicode("Greek")`            | `\p{Greek}`                              |
//! | Negated class                 | `[^…]`                                   |
//! | Captured sequence             | `(…)`                                    |
//! | Non-captured sequence         | `(?:…)`                                  |
//! | Named group                   | `(?P<name>…)`                            |
//! | Alternation                   | `(?:a\|b)`                               |
//! | `ZeroOrMore` / lazy           | `*` / `*?`                               |
//! | `OneOrMore` / lazy            | `+` / `+?`                               |
//! | `ZeroOrOne` / lazy            | `?` / `??`                               |
//! | `AtLeast(n)`                  | `{n,}`                                   |
//! | `Between(n, m)`               | `{n,m}`                                  |
//! | `Exactly(n)`                  | `{n}`                                    |
//!
//! Empty classes and groups render as nothing, as does any repetition of them.

pub mod ast;
pub mod char_class;
mod render;
pub mod repeat;

pub use ast::{ClassItem, ClassToken, GroupBody, GroupKind, GroupToken, PosixClass, Quantifier, Token};
pub use repeat::Repeat;
