use std::marker::PhantomData;

use crate::{input::Input, pair::Pair, result::ParserResult};

/// The fundamental parsing construct. A pure function from [`Input`] to [`ParserResult`] which
/// comes with combinators for building bigger parsers out of it.
///
/// Every parser upholds the same contract: on failure, the returned result carries exactly the
/// input it was given. Combinators rely on this to retry alternatives from the same spot.
pub trait Parser<T>: private::SealedParser<T> {
    /// Parse a value from the start of `input`.
    fn parse(&self, input: &Input) -> ParserResult<T>;

    /// Map the output value using a mapping function.
    fn map<V>(self, f: impl Fn(T) -> V) -> impl Parser<V>
    where
        Self: Sized,
    {
        parser(move |input| self.parse(input).map(&f))
    }

    /// Apply `next` to whatever this parser leaves over, producing both values as a [Pair].
    /// If either side fails, the whole sequence fails as though nothing had been consumed.
    fn and_then<U>(self, next: impl Parser<U>) -> impl Parser<Pair<T, U>>
    where
        Self: Sized,
    {
        parser(move |input| {
            let ParserResult {
                success: Some(first),
                remaining,
            } = self.parse(input)
            else {
                return ParserResult::failure(input.clone());
            };
            match next.parse(&remaining) {
                ParserResult {
                    success: Some(second),
                    remaining,
                } => ParserResult::success(Pair::new(first, second), remaining),
                _ => ParserResult::failure(input.clone()),
            }
        })
    }

    /// Try another parser if this one fails. The first parser to succeed wins: `other` is never
    /// invoked once this parser has matched, even if it could have matched more input.
    fn or_else(self, other: impl Parser<T>) -> impl Parser<T>
    where
        Self: Sized,
    {
        parser(move |input| {
            let res = self.parse(input);
            if res.is_success() {
                return res;
            }
            other.parse(input)
        })
    }

    /// Try to parse as many times as possible in sequence, allowing zero matches.
    fn repeated(self) -> impl Parser<Vec<T>>
    where
        Self: Sized,
    {
        parser(move |input| {
            let mut elems = vec![];
            let mut remaining = input.clone();
            loop {
                let res = self.parse(&remaining);
                let Some(elem) = res.success else {
                    break;
                };
                elems.push(elem);
                // a match that consumed nothing would match forever
                if res.remaining.offset() == remaining.offset() {
                    break;
                }
                remaining = res.remaining;
            }
            ParserResult::success(elems, remaining)
        })
    }

    /// Match this parser optionally. This parsing operation will always succeed, returning [None]
    /// over the untouched input if the child failed.
    fn optional(self) -> impl Parser<Option<T>>
    where
        Self: Sized,
    {
        parser(move |input| match self.parse(input) {
            ParserResult {
                success: Some(value),
                remaining,
            } => ParserResult::success(Some(value), remaining),
            _ => ParserResult::success(None, input.clone()),
        })
    }
}

/// Extraction of either side of a [Pair]-valued parser, typically to drop delimiters.
pub trait PairParser<A, B>: Parser<Pair<A, B>> {
    /// Keep the first component of the pair.
    fn first(self) -> impl Parser<A>
    where
        Self: Sized,
    {
        self.map(|pair| pair.first)
    }

    /// Keep the second component of the pair.
    fn second(self) -> impl Parser<B>
    where
        Self: Sized,
    {
        self.map(|pair| pair.second)
    }
}

impl<A, B, P> PairParser<A, B> for P where P: Parser<Pair<A, B>> {}

/// Create a Parser from a closure or function which takes in an [`Input`] and returns a
/// [`ParserResult`].
///
/// Grammar rules written as plain functions can refer to each other through this, which is how
/// mutually recursive rules are tied together.
pub fn parser<T>(f: impl Fn(&Input) -> ParserResult<T>) -> impl Parser<T> {
    ParserImpl(f, PhantomData)
}

struct ParserImpl<F, T>(F, PhantomData<fn() -> T>);

mod private {
    pub trait SealedParser<T> {}
}

impl<F, T> private::SealedParser<T> for ParserImpl<F, T> where F: Fn(&Input) -> ParserResult<T> {}

impl<F, T> Parser<T> for ParserImpl<F, T>
where
    F: Fn(&Input) -> ParserResult<T>,
{
    fn parse(&self, input: &Input) -> ParserResult<T> {
        (self.0)(input)
    }
}
