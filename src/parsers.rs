use crate::{parser, Input, Pair, PairParser, Parser, ParserResult};

/// Create a parser which parses a single code point matching a predicate.
pub fn char_filter(f: impl Fn(char) -> bool) -> impl Parser<char> {
    parser(move |input: &Input| {
        let next = input.current_symbol();
        if !input.is_exhausted() && f(next) {
            return ParserResult::success(next, input.rest());
        }
        ParserResult::failure(input.clone())
    })
}

/// Create a parser which parses exactly the code point `expected`.
pub fn expect_char(expected: char) -> impl Parser<char> {
    char_filter(move |c| c == expected)
}

/// Create a parser which parses the code points of `expected` in order, producing them as a
/// [String]. A partial match fails without consuming anything.
pub fn expect_str(expected: &str) -> impl Parser<String> {
    let expected: Vec<char> = expected.chars().collect();
    parser(move |input: &Input| {
        let mut remaining = input.clone();
        for &c in &expected {
            if remaining.is_exhausted() || remaining.current_symbol() != c {
                return ParserResult::failure(input.clone());
            }
            remaining = remaining.rest();
        }
        ParserResult::success(expected.iter().collect(), remaining)
    })
}

/// Accept a first code point satisfying `is_first`, then every following code point which
/// satisfies `is_later`. Only fails if the first code point is rejected.
pub fn expect_several(
    is_first: impl Fn(char) -> bool,
    is_later: impl Fn(char) -> bool,
) -> impl Parser<String> {
    char_filter(is_first)
        .and_then(char_filter(is_later).repeated())
        .map(|Pair { first, second }| {
            std::iter::once(first).chain(second).collect::<String>()
        })
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Parses `[a-zA-Z_][a-zA-Z0-9_]*`.
pub fn identifier() -> impl Parser<String> {
    expect_several(is_identifier_start, is_identifier_char)
}

/// Parses `[ \t\n\r]*`. Always succeeds, producing the whitespace it skipped.
pub fn spaces() -> impl Parser<String> {
    expect_several(is_space, is_space)
        .optional()
        .map(Option::unwrap_or_default)
}

/// Allow and ignore whitespace before applying `parser`.
pub fn maybe_spaces_before<T>(parser: impl Parser<T>) -> impl Parser<T> {
    spaces().and_then(parser).second()
}

/// Parses the symbol `s`, allowing whitespace in front of it.
pub fn token(s: &str) -> impl Parser<String> {
    maybe_spaces_before(expect_str(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_str_is_all_or_nothing() {
        let start = Input::new("ab");
        assert_eq!(expect_str("abc").parse(&start), ParserResult::failure(start));

        let res = expect_str("ab").parse(&Input::new("abc"));
        assert_eq!(res.success.as_deref(), Some("ab"));
        assert_eq!(res.remaining.remaining_text(), "c");
    }

    #[test]
    fn sentinel_is_never_matched() {
        let start = Input::new("");
        assert_eq!(
            expect_char(crate::input::END_OF_INPUT).parse(&start),
            ParserResult::failure(start)
        );
    }

    #[test]
    fn identifier_stops_at_first_foreign_char() {
        let res = identifier().parse(&Input::new("_x9 &"));
        assert_eq!(res.success.as_deref(), Some("_x9"));
        assert_eq!(res.remaining.remaining_text(), " &");

        let start = Input::new("9x");
        assert_eq!(identifier().parse(&start), ParserResult::failure(start));
    }

    #[test]
    fn identifier_runs_to_end_of_input() {
        let res = identifier().parse(&Input::new("xyz"));
        assert_eq!(res.success.as_deref(), Some("xyz"));
        assert!(res.remaining.is_exhausted());
    }

    #[test]
    fn spaces_may_be_empty() {
        let start = Input::new("a");
        assert_eq!(
            spaces().parse(&start),
            ParserResult::success(String::new(), start)
        );
        let res = spaces().parse(&Input::new(" \t\r\n a"));
        assert_eq!(res.remaining.remaining_text(), "a");
    }

    #[test]
    fn token_skips_leading_whitespace_only() {
        let res = token("&").parse(&Input::new("  & b"));
        assert_eq!(res.success.as_deref(), Some("&"));
        assert_eq!(res.remaining.remaining_text(), " b");

        let start = Input::new("  | b");
        assert_eq!(token("&").parse(&start), ParserResult::failure(start));
    }
}
