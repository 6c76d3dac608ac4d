use crate::{parser, Input, Parser};
use std::fmt::Debug;

/// Logs every invocation of the wrapped parser at `trace` level, with the position it started
/// from and what it produced, and returns the result unchanged.
pub fn trace<T>(inner: impl Parser<T>, name: &'static str) -> impl Parser<T>
where
    T: Debug,
{
    parser(move |input: &Input| {
        let res = inner.parse(input);
        if log::log_enabled!(log::Level::Trace) {
            let (line, col) = (input.line(), input.col());
            match &res.success {
                Some(value) => log::trace!(
                    "[{name}:{line}:{col}] matched {value:?}, {consumed} consumed",
                    consumed = res.remaining.offset() - input.offset()
                ),
                None => log::trace!("[{name}:{line}:{col}] no match"),
            }
        }
        res
    })
}
