//! Transcription of regular expressions into builder code.
//!
//! The pattern is parsed with [`regex_syntax`] and its syntax tree is walked
//! recursively, emitting one dialect call per node. Constructs without a
//! dialect equivalent are carried over as `common::raw` of their source text.

use itertools::Itertools;
use phf::{Map, phf_map};
use regex_syntax::ast::{
    self, Assertion, AssertionKind, Ast, ClassBracketed, ClassPerl, ClassPerlKind, ClassSet,
    ClassSetItem, ClassUnicode, ClassUnicodeKind, GroupKind, Repetition, RepetitionKind,
    RepetitionRange, Span,
};

/// Errors that can occur while transcribing a pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateError {
    Empty,
    Syntax(ast::Error),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty pattern"),
            Self::Syntax(err) => write!(f, "Invalid regular expression: {err}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Syntax(err) => Some(err),
        }
    }
}

/// Dialect calls for the POSIX class names.
const POSIX_CLASSES: Map<&'static str, &'static str> = phf_map! {
    "alnum" => "chars::alphanumeric()",
    "alpha" => "chars::alphabetic()",
    "ascii" => "chars::ascii()",
    "blank" => "chars::blank()",
    "cntrl" => "chars::control()",
    "digit" => "chars::digits()",
    "graph" => "chars::graphical()",
    "lower" => "chars::lower()",
    "print" => "chars::printable()",
    "punct" => "chars::punctuation()",
    "space" => "chars::whitespace()",
    "upper" => "chars::upper()",
    "word" => "chars::word_character()",
    "xdigit" => "chars::hex_digits()",
};

const INDENT: &str = "    ";

/// Generate `Rex::new(tokens![...])` code for a regular expression.
///
/// ```
/// let code = rex::generator::generate_code("^[a-z]+$").unwrap();
/// assert_eq!(
///     code,
///     "Rex::new(tokens![
///     chars::begin(),
///     common::class([
///         chars::range('a', 'z'),
///     ]).repeat().one_or_more(),
///     chars::end(),
/// ])"
/// );
/// ```
pub fn generate_code(pattern: &str) -> Result<String, GenerateError> {
    let ast = ast::parse::Parser::new()
        .parse(pattern)
        .map_err(GenerateError::Syntax)?;
    if matches!(ast, Ast::Empty(_)) {
        return Err(GenerateError::Empty);
    }

    let generator = Generator { source: pattern };
    let mut code = String::from("Rex::new(tokens![\n");
    for node in generator.sequence(&ast) {
        node.write(&mut code, 1);
    }
    code.push_str("])");
    Ok(code)
}

/// One dialect call, possibly with nested calls, before layout.
#[derive(Debug)]
enum Node {
    Leaf {
        code: String,
        repeatable: bool,
    },
    Group {
        open: &'static str,
        children: Vec<Node>,
        close: String,
        repeatable: bool,
    },
}

impl Node {
    fn leaf(code: impl Into<String>, repeatable: bool) -> Self {
        Node::Leaf {
            code: code.into(),
            repeatable,
        }
    }

    fn group(open: &'static str, children: Vec<Node>) -> Self {
        Node::Group {
            open,
            children,
            close: "])".to_string(),
            repeatable: true,
        }
    }

    /// Classes and groups take a quantifier; plain tokens do not.
    fn is_repeatable(&self) -> bool {
        match self {
            Node::Leaf { repeatable, .. } | Node::Group { repeatable, .. } => *repeatable,
        }
    }

    fn repeated(self, quantifier: &str) -> Self {
        let node = if self.is_repeatable() {
            self
        } else {
            Node::group("group::non_captured(tokens![", vec![self])
        };
        let suffix = format!(".repeat().{quantifier}");
        match node {
            Node::Leaf { code, .. } => Node::leaf(code + &suffix, false),
            Node::Group {
                open,
                children,
                close,
                ..
            } => Node::Group {
                open,
                children,
                close: close + &suffix,
                repeatable: false,
            },
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = INDENT.repeat(depth);
        match self {
            Node::Leaf { code, .. } => {
                out.push_str(&indent);
                out.push_str(code);
                out.push_str(",\n");
            }
            Node::Group {
                open,
                children,
                close,
                ..
            } if children.is_empty() => {
                out.push_str(&indent);
                out.push_str(open);
                out.push_str(close);
                out.push_str(",\n");
            }
            Node::Group {
                open,
                children,
                close,
                ..
            } => {
                out.push_str(&indent);
                out.push_str(open);
                out.push('\n');
                for child in children {
                    child.write(out, depth + 1);
                }
                out.push_str(&indent);
                out.push_str(close);
                out.push_str(",\n");
            }
        }
    }
}

fn literals(chars: &[char]) -> Node {
    match chars {
        [ch] => Node::leaf(format!("chars::single({ch:?})"), true),
        _ => Node::leaf(format!("common::text({:?})", chars.iter().collect::<String>()), false),
    }
}

fn perl_class(class: &ClassPerl) -> Option<Node> {
    if class.negated {
        return None;
    }
    let call = match class.kind {
        ClassPerlKind::Digit => "chars::digits()",
        ClassPerlKind::Space => "chars::whitespace()",
        ClassPerlKind::Word => "chars::word_character()",
    };
    Some(Node::leaf(call, true))
}

fn unicode_class(class: &ClassUnicode) -> Option<Node> {
    if class.is_negated() {
        return None;
    }
    let name = match &class.kind {
        ClassUnicodeKind::OneLetter(letter) => letter.to_string(),
        ClassUnicodeKind::Named(name) => name.clone(),
        ClassUnicodeKind::NamedValue { .. } => return None,
    };
    Some(Node::leaf(format!("chars::unicode_by_name({name:?})"), true))
}

struct Generator<'a> {
    source: &'a str,
}

impl Generator<'_> {
    fn raw(&self, span: &Span) -> Node {
        let text = &self.source[span.start.offset..span.end.offset];
        Node::leaf(format!("common::raw({text:?})"), false)
    }

    /// The nodes of `ast` laid out one after another.
    fn sequence(&self, ast: &Ast) -> Vec<Node> {
        match ast {
            Ast::Concat(concat) => self.concat(&concat.asts),
            Ast::Empty(_) => Vec::new(),
            other => vec![self.node(other)],
        }
    }

    fn concat(&self, asts: &[Ast]) -> Vec<Node> {
        let mut nodes = Vec::new();
        let runs = asts.iter().chunk_by(|ast| matches!(ast, Ast::Literal(_)));
        for (is_literal, run) in &runs {
            if is_literal {
                let chars: Vec<char> = run
                    .filter_map(|ast| match ast {
                        Ast::Literal(literal) => Some(literal.c),
                        _ => None,
                    })
                    .collect();
                nodes.push(literals(&chars));
            } else {
                nodes.extend(run.filter(|ast| !matches!(ast, Ast::Empty(_))).map(|ast| self.node(ast)));
            }
        }
        nodes
    }

    /// `ast` as exactly one node.
    fn single(&self, ast: &Ast) -> Node {
        let mut nodes = self.sequence(ast);
        match nodes.pop() {
            Some(node) if nodes.is_empty() => node,
            Some(last) => {
                nodes.push(last);
                Node::group("group::non_captured(tokens![", nodes)
            }
            None => Node::group("group::non_captured(tokens![", nodes),
        }
    }

    fn node(&self, ast: &Ast) -> Node {
        match ast {
            Ast::Empty(span) => self.raw(span),
            Ast::Flags(flags) => self.raw(&flags.span),
            Ast::Literal(literal) => literals(&[literal.c]),
            Ast::Dot(_) => Node::leaf("chars::any()", true),
            Ast::Assertion(assertion) => self.assertion(assertion),
            Ast::ClassUnicode(class) => unicode_class(class).unwrap_or_else(|| self.raw(&class.span)),
            Ast::ClassPerl(class) => perl_class(class).unwrap_or_else(|| self.raw(&class.span)),
            Ast::ClassBracketed(class) => self.bracketed(class).unwrap_or_else(|| self.raw(&class.span)),
            Ast::Repetition(repetition) => self.repetition(repetition),
            Ast::Group(group) => self.group(group),
            Ast::Alternation(alternation) => Node::group(
                "group::composite(tokens![",
                alternation.asts.iter().map(|ast| self.single(ast)).collect(),
            ),
            Ast::Concat(_) => self.single(ast),
        }
    }

    fn assertion(&self, assertion: &Assertion) -> Node {
        let call = match &assertion.kind {
            AssertionKind::StartLine => "chars::begin()",
            AssertionKind::EndLine => "chars::end()",
            AssertionKind::StartText => "chars::begin_of_text()",
            AssertionKind::EndText => "chars::end_of_text()",
            AssertionKind::WordBoundary => "chars::word_boundary()",
            _ => return self.raw(&assertion.span),
        };
        Node::leaf(call, false)
    }

    fn bracketed(&self, class: &ClassBracketed) -> Option<Node> {
        let ClassSet::Item(item) = &class.kind else {
            return None;
        };
        let mut items = Vec::new();
        self.class_items(item, &mut items)?;
        let open = if class.negated {
            "common::not_class(["
        } else {
            "common::class(["
        };
        Some(Node::group(open, items))
    }

    fn class_items(&self, item: &ClassSetItem, out: &mut Vec<Node>) -> Option<()> {
        match item {
            ClassSetItem::Empty(_) => {}
            ClassSetItem::Literal(literal) => {
                out.push(Node::leaf(format!("chars::single({:?})", literal.c), true));
            }
            ClassSetItem::Range(range) => {
                out.push(Node::leaf(
                    format!("chars::range({:?}, {:?})", range.start.c, range.end.c),
                    true,
                ));
            }
            ClassSetItem::Ascii(class) => {
                if class.negated {
                    return None;
                }
                let text = &self.source[class.span.start.offset..class.span.end.offset];
                let name = text.trim_start_matches("[:").trim_end_matches(":]");
                out.push(Node::leaf(*POSIX_CLASSES.get(name)?, true));
            }
            ClassSetItem::Unicode(class) => out.push(unicode_class(class)?),
            ClassSetItem::Perl(class) => out.push(perl_class(class)?),
            ClassSetItem::Bracketed(class) => out.push(self.bracketed(class)?),
            ClassSetItem::Union(union) => {
                for item in &union.items {
                    self.class_items(item, out)?;
                }
            }
        }
        Some(())
    }

    fn repetition(&self, repetition: &Repetition) -> Node {
        let greedy = repetition.greedy;
        let quantifier = match &repetition.op.kind {
            RepetitionKind::ZeroOrOne if greedy => "zero_or_one()".to_string(),
            RepetitionKind::ZeroOrOne => "zero_or_one_prefer_zero()".to_string(),
            RepetitionKind::ZeroOrMore if greedy => "zero_or_more()".to_string(),
            RepetitionKind::ZeroOrMore => "zero_or_more_prefer_fewer()".to_string(),
            RepetitionKind::OneOrMore if greedy => "one_or_more()".to_string(),
            RepetitionKind::OneOrMore => "one_or_more_prefer_fewer()".to_string(),
            RepetitionKind::Range(RepetitionRange::Exactly(n)) => format!("exactly({n})"),
            RepetitionKind::Range(RepetitionRange::AtLeast(n)) if greedy => format!("at_least({n})"),
            RepetitionKind::Range(RepetitionRange::AtLeast(n)) => format!("at_least_prefer_fewer({n})"),
            RepetitionKind::Range(RepetitionRange::Bounded(from, to)) if greedy => {
                format!("between({from}, {to})")
            }
            RepetitionKind::Range(RepetitionRange::Bounded(from, to)) => {
                format!("between_prefer_fewer({from}, {to})")
            }
        };
        self.node(&repetition.ast).repeated(&quantifier)
    }

    fn group(&self, group: &ast::Group) -> Node {
        let (open, close) = match &group.kind {
            GroupKind::CaptureIndex(_) => ("group::define(tokens![", "])".to_string()),
            GroupKind::CaptureName { name, .. } => {
                ("group::define(tokens![", format!("]).with_name({:?})", name.name))
            }
            GroupKind::NonCapturing(flags) if flags.items.is_empty() => {
                ("group::non_captured(tokens![", "])".to_string())
            }
            GroupKind::NonCapturing(_) => return self.raw(&group.span),
        };
        Node::Group {
            open,
            children: self.sequence(&group.ast),
            close,
            repeatable: true,
        }
    }
}
