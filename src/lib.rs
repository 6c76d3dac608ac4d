//! Parser combinators over an immutable code point [`Input`], and a grammar for Boolean
//! expressions built from them.
//!
//! A [`Parser`] either succeeds with a value and the input left after it, or fails and hands back
//! the input it was given. Bigger parsers are assembled with [`Parser::and_then`],
//! [`Parser::or_else`], [`Parser::repeated`], [`Parser::optional`], [`Parser::map`] and the
//! [`PairParser`] extractors.
//!
//! ```
//! use boolparse::{grammar::expression, parse};
//! use std::collections::HashMap;
//!
//! let node = parse(expression, "!a & (b | c)").unwrap();
//! let vars = HashMap::from([("b", true)]);
//! assert!(node.eval(&vars));
//! ```

use std::str::FromStr;

pub mod ast;
pub mod attr;
pub mod error;
pub mod grammar;
pub mod input;
pub mod pair;
pub mod parser;
pub mod parsers;
pub mod pretty;
pub mod result;

pub use ast::{Lookup, Node, TruthRow};
pub use error::ParserError;
pub use input::Input;
pub use pair::Pair;
pub use parser::{parser, PairParser, Parser};
pub use pretty::PrettyOptions;
pub use result::ParserResult;

pub mod prelude {
    pub use crate::{
        ast::{Lookup, Node},
        parser,
        parsers::*,
        Input, Pair, PairParser, Parser, ParserError, ParserResult,
    };
}

/// Stack that must remain before a recursive step moves onto a fresh segment.
const RED_ZONE: usize = 128 * 1024;
/// Size of each stack segment allocated once the red zone is reached.
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

/// Run `f`, switching to a freshly allocated stack segment first if the current one is nearly
/// used up. Every recursive grammar rule and tree walk goes through here, so nesting depth is
/// bounded by memory rather than by the thread's stack.
pub(crate) fn grow_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// Run `rule` over all of `text`. Fails if the rule fails or leaves input unconsumed.
pub fn parse<T>(rule: impl Fn(&Input) -> ParserResult<T>, text: &str) -> Result<T, ParserError> {
    rule(&Input::new(text))
        .result()
        .inspect_err(|err| log::debug!("parse of {text:?} failed: {err}"))
}

/// Like [parse], but renders errors pointing out where in `text` parsing stopped.
pub fn parse_pretty<T>(
    rule: impl Fn(&Input) -> ParserResult<T>,
    text: &str,
    color: bool,
) -> Result<T, String> {
    let options = if color {
        PrettyOptions::default()
    } else {
        PrettyOptions::no_color()
    };
    rule(&Input::new(text))
        .pretty(&options)
        .inspect_err(|_| log::debug!("parse of {text:?} failed"))
}

impl FromStr for Node {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(grammar::expression, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_requires_whole_input() {
        assert_eq!(
            parse(grammar::expression, "a|b "),
            Ok(Node::or(Node::var("a"), Node::var("b")))
        );
        assert_eq!(
            parse(grammar::expression, "a b"),
            Err(ParserError::TrailingInput {
                offset: 2,
                line: 1,
                col: 3
            })
        );
        assert_eq!(
            "(a".parse::<Node>(),
            Err(ParserError::NoMatch {
                offset: 0,
                line: 1,
                col: 1
            })
        );
    }

    #[test]
    fn parse_pretty_points_at_leftovers() {
        let err = parse_pretty(grammar::expression, "a b", false).unwrap_err();
        assert_eq!(err, "1 | a b\n      ^\n[1:3] Unexpected trailing input");
    }

    #[test]
    fn combinator_parsers_can_be_run_directly() {
        let digits = parsers::expect_several(|c| c.is_ascii_digit(), |c| c.is_ascii_digit());
        assert_eq!(parse(|input| digits.parse(input), "123"), Ok("123".to_string()));
    }
}
