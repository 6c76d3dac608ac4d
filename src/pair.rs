/// The value produced by sequencing two parsers with [crate::Parser::and_then].
///
/// Meant as an intermediate: grammar rules should pick it apart with
/// [crate::PairParser::first], [crate::PairParser::second] or a conversion
/// rather than expose it in their output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}
