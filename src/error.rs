use crate::input::Input;

/// Raised at the boundary where a parse is required to cover its whole input.
///
/// The combinators themselves never produce errors; positions here are derived purely from
/// how much input a parse left unconsumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParserError {
    /// Thrown when the parser failed, leaving the input untouched from `offset` on.
    #[error("Unexpected token or end of input ({line}:{col})")]
    NoMatch {
        offset: usize,
        line: usize,
        col: usize,
    },
    /// Thrown when parsing succeeds, but there are more tokens left in the input which were not consumed.
    #[error("Unexpected trailing input ({line}:{col})")]
    TrailingInput {
        offset: usize,
        line: usize,
        col: usize,
    },
}

impl ParserError {
    pub fn no_match(at: &Input) -> Self {
        ParserError::NoMatch {
            offset: at.offset(),
            line: at.line(),
            col: at.col(),
        }
    }

    pub fn trailing_input(at: &Input) -> Self {
        ParserError::TrailingInput {
            offset: at.offset(),
            line: at.line(),
            col: at.col(),
        }
    }

    /// Offset of the first unconsumed code point.
    pub fn offset(&self) -> usize {
        match self {
            ParserError::NoMatch { offset, .. } | ParserError::TrailingInput { offset, .. } => {
                *offset
            }
        }
    }

    /// The message without position information.
    pub fn description(&self) -> &'static str {
        match self {
            ParserError::NoMatch { .. } => "Unexpected token or end of input",
            ParserError::TrailingInput { .. } => "Unexpected trailing input",
        }
    }
}
