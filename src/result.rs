use crate::{
    error::ParserError,
    input::Input,
    pretty::{pretty_error, PrettyOptions},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The output of a [crate::parser::Parser]
pub struct ParserResult<T> {
    /// The successfully-parsed value, or [None] if parsing failed.
    pub success: Option<T>,
    /// The input left after the parsed value. On failure, this is the input the parser was given.
    pub remaining: Input,
}

impl<T> ParserResult<T> {
    /// Generate a successful [ParserResult] holding a value and the input after it.
    pub fn success(value: T, remaining: Input) -> Self {
        ParserResult {
            success: Some(value),
            remaining,
        }
    }

    /// Generate a failed [ParserResult]. `input` must be the input the parser was invoked with.
    pub fn failure(input: Input) -> Self {
        ParserResult {
            success: None,
            remaining: input,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success.is_some()
    }

    /// Map the output type using a mapping function. Failures pass through unchanged.
    pub fn map<V>(self, f: impl FnOnce(T) -> V) -> ParserResult<V> {
        ParserResult {
            success: self.success.map(f),
            remaining: self.remaining,
        }
    }

    /// Convert this into a [Result]. If the entire input was not consumed, the parse is treated
    /// as having failed, even if a success value is present.
    pub fn result(self) -> Result<T, ParserError> {
        match self.success {
            Some(value) if self.remaining.is_exhausted() => Ok(value),
            Some(_) => Err(ParserError::trailing_input(&self.remaining)),
            None => Err(ParserError::no_match(&self.remaining)),
        }
    }

    /// Like [ParserResult::result], but renders the error pointing out its location in the input.
    pub fn pretty(self, options: &PrettyOptions) -> Result<T, String> {
        let remaining = self.remaining.clone();
        self.result()
            .map_err(|err| pretty_error(&remaining, err.description(), options))
    }
}
