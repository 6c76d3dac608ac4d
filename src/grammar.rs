//! Boolean expression grammar, built purely from combinators.
//!
//! ```text
//! expression  ::= disjunction spaces
//! disjunction ::= conjunction ("|" disjunction)?
//! conjunction ::= negation ("&" conjunction)?
//! negation    ::= "!"* atom
//! atom        ::= variable | "(" expression ")"
//! variable    ::= [a-zA-Z_][a-zA-Z0-9_]*
//! ```
//!
//! Whitespace is allowed in front of every symbol and identifier. Binary operators associate
//! to the right, so `a&b&c` is `a&(b&c)`.

use crate::{
    attr::trace,
    ast::Node,
    grow_stack,
    parser,
    parsers::{identifier, maybe_spaces_before, spaces, token},
    Input, Pair, PairParser, Parser, ParserResult,
};

/// The top level rule. Consumes trailing whitespace, so a well-formed expression leaves the
/// input exhausted.
pub fn expression(input: &Input) -> ParserResult<Node> {
    grow_stack(|| {
        trace(parser(disjunction).and_then(spaces()).first(), "expression").parse(input)
    })
}

pub fn disjunction(input: &Input) -> ParserResult<Node> {
    grow_stack(|| {
        let rest = token("|").and_then(parser(disjunction)).second();
        trace(
            parser(conjunction).and_then(rest.optional()).map(make_or),
            "disjunction",
        )
        .parse(input)
    })
}

pub fn conjunction(input: &Input) -> ParserResult<Node> {
    grow_stack(|| {
        let rest = token("&").and_then(parser(conjunction)).second();
        trace(
            parser(negation).and_then(rest.optional()).map(make_and),
            "conjunction",
        )
        .parse(input)
    })
}

pub fn negation(input: &Input) -> ParserResult<Node> {
    grow_stack(|| {
        trace(
            exclamation_marks()
                .and_then(parser(atom))
                .map(|Pair { first, second }| make_not(first, second)),
            "negation",
        )
        .parse(input)
    })
}

/// Counts the `!` in front of an atom.
pub fn exclamation_marks() -> impl Parser<usize> {
    token("!").repeated().map(|marks| marks.len())
}

pub fn atom(input: &Input) -> ParserResult<Node> {
    grow_stack(|| {
        let parenthesized = token("(")
            .and_then(parser(expression))
            .and_then(token(")"))
            .first()
            .second();
        trace(parser(variable).or_else(parenthesized), "atom").parse(input)
    })
}

pub fn variable(input: &Input) -> ParserResult<Node> {
    trace(maybe_spaces_before(identifier()).map(Node::Var), "variable").parse(input)
}

/// Wrap `node` in `count` [Node::Not] layers.
pub fn make_not(count: usize, node: Node) -> Node {
    (0..count).fold(node, |node, _| Node::not(node))
}

/// Collapse a lone operand to itself, otherwise build the [Node::And] of both sides.
pub fn make_and(Pair { first, second }: Pair<Node, Option<Node>>) -> Node {
    match second {
        Some(rhs) => Node::and(first, rhs),
        None => first,
    }
}

/// Collapse a lone operand to itself, otherwise build the [Node::Or] of both sides.
pub fn make_or(Pair { first, second }: Pair<Node, Option<Node>>) -> Node {
    match second {
        Some(rhs) => Node::or(first, rhs),
        None => first,
    }
}
