//! Tree types for composed regular expressions.

use super::repeat::Repeat;

/// One node of a composed pattern.
///
/// The set of node kinds is closed; [`Token`] renders itself through
/// [`Display`](std::fmt::Display), which recurses over the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text. Metacharacters are escaped on output.
    Text(String),
    /// Pattern syntax written out verbatim.
    Raw(String),
    Class(ClassToken),
    Group(GroupToken),
    /// A class or group followed by a quantifier.
    Repeated {
        token: Box<Token>,
        quantifier: Quantifier,
        lazy: bool,
    },
}

impl Token {
    /// True when the token renders as the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Token::Text(text) | Token::Raw(text) => text.is_empty(),
            Token::Class(class) => class.items.is_empty(),
            Token::Group(group) => group.body.tokens().is_empty(),
            Token::Repeated { token, .. } => token.is_empty(),
        }
    }
}

impl From<ClassToken> for Token {
    fn from(class: ClassToken) -> Self {
        Token::Class(class)
    }
}

impl From<GroupToken> for Token {
    fn from(group: GroupToken) -> Self {
        Token::Group(group)
    }
}

/// A character or set of characters.
///
/// Unbracketed classes hold a single item that is valid on its own
/// (`a`, `.`, `\p{Greek}`); bracketed ones render as `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassToken {
    pub items: Vec<ClassItem>,
    pub negated: bool,
    pub bracketed: bool,
}

impl ClassToken {
    pub fn bracketed(items: Vec<ClassItem>) -> Self {
        Self {
            items,
            negated: false,
            bracketed: true,
        }
    }

    pub fn bare(item: ClassItem) -> Self {
        Self {
            items: vec![item],
            negated: false,
            bracketed: false,
        }
    }

    /// Raw class syntax such as `A-Z`, spliced into an enclosing class as is.
    ///
    /// Standalone it keeps its brackets (`[A-Z]`), so a quantifier applies
    /// to the whole class.
    pub fn raw(syntax: &str) -> Self {
        Self::bracketed(vec![ClassItem::Raw(syntax.to_string())])
    }

    pub fn repeat(self) -> Repeat {
        Repeat::new(self.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassItem {
    Single(char),
    Range(char, char),
    /// A POSIX ASCII class; renders as `[:name:]`.
    Posix(PosixClass),
    /// A Unicode class by general category or script name (`\p{Greek}`).
    Unicode(String),
    /// `.`; between brackets it is a plain dot.
    Any,
    Raw(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosixClass {
    Alnum,
    Alpha,
    Ascii,
    Blank,
    Cntrl,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    Xdigit,
}

impl PosixClass {
    pub fn name(self) -> &'static str {
        match self {
            PosixClass::Alnum => "alnum",
            PosixClass::Alpha => "alpha",
            PosixClass::Ascii => "ascii",
            PosixClass::Blank => "blank",
            PosixClass::Cntrl => "cntrl",
            PosixClass::Graph => "graph",
            PosixClass::Lower => "lower",
            PosixClass::Print => "print",
            PosixClass::Punct => "punct",
            PosixClass::Space => "space",
            PosixClass::Upper => "upper",
            PosixClass::Word => "word",
            PosixClass::Xdigit => "xdigit",
        }
    }
}

/// A parenthesized sequence or alternation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupToken {
    pub kind: GroupKind,
    pub body: GroupBody,
}

impl GroupToken {
    pub fn new(kind: GroupKind, body: GroupBody) -> Self {
        Self { kind, body }
    }

    /// Marks the group as non-capturing. Overrides a name if set.
    pub fn non_captured(mut self) -> Self {
        self.kind = GroupKind::NonCaptured;
        self
    }

    /// Marks the group as a numbered capture. Overrides a name if set.
    pub fn captured(mut self) -> Self {
        self.kind = GroupKind::Captured;
        self
    }

    /// Turns the group into a named capture (`(?P<name>...)`).
    pub fn with_name(mut self, name: &str) -> Self {
        self.kind = GroupKind::Named(name.to_string());
        self
    }

    pub fn repeat(self) -> Repeat {
        Repeat::new(self.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKind {
    Captured,
    NonCaptured,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupBody {
    /// Tokens matched one after another.
    Sequence(Vec<Token>),
    /// Tokens tried left to right, `|`-separated.
    Alternation(Vec<Token>),
}

impl GroupBody {
    pub fn tokens(&self) -> &[Token] {
        match self {
            GroupBody::Sequence(tokens) | GroupBody::Alternation(tokens) => tokens,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    AtLeast(usize),
    Between(usize, usize),
    Exactly(usize),
}
