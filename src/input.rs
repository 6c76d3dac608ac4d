use std::{fmt, sync::Arc};

/// Returned by [`Input::current_symbol`] once the cursor has run past the last code point.
pub const END_OF_INPUT: char = '\0';

/// An immutable cursor over a shared sequence of code points.
///
/// Advancing never touches the underlying text, it only produces a new cursor, so an
/// `Input` can be cloned and handed to as many parsers as needed. Failed parsers hand
/// back the exact `Input` they were given, which is what makes retrying with an
/// alternative safe.
#[derive(Clone)]
pub struct Input {
    text: Arc<[char]>,
    pos: usize,
}

impl Input {
    /// Create an input positioned at the first code point of `text`.
    pub fn new(text: &str) -> Self {
        Input {
            text: text.chars().collect(),
            pos: 0,
        }
    }

    /// The code point under the cursor, or [`END_OF_INPUT`] if nothing is left.
    pub fn current_symbol(&self) -> char {
        self.text.get(self.pos).copied().unwrap_or(END_OF_INPUT)
    }

    /// The input advanced by exactly one code point. Advancing an exhausted input
    /// yields another exhausted input.
    pub fn rest(&self) -> Input {
        Input {
            text: Arc::clone(&self.text),
            pos: (self.pos + 1).min(self.text.len()),
        }
    }

    /// True once every code point has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Number of code points consumed so far.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// The code points before the cursor.
    pub fn consumed(&self) -> &[char] {
        &self.text[..self.pos]
    }

    /// The code points from the cursor to the end of the text.
    pub fn remaining(&self) -> &[char] {
        &self.text[self.pos..]
    }

    /// [Input::remaining] collected into a [String].
    pub fn remaining_text(&self) -> String {
        self.remaining().iter().collect()
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        line(self.consumed())
    }

    /// 1-based column of the cursor, counted in code points.
    pub fn col(&self) -> usize {
        col(self.consumed())
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::new(text)
    }
}

impl PartialEq for Input {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos && (Arc::ptr_eq(&self.text, &other.text) || self.text == other.text)
    }
}

impl Eq for Input {}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("offset", &self.pos)
            .field("remaining", &self.remaining_text())
            .finish()
    }
}

/// 1-based line reached after `consumed`.
pub fn line(consumed: &[char]) -> usize {
    consumed.iter().filter(|c| **c == '\n').count() + 1
}

/// 1-based column reached after `consumed`.
pub fn col(consumed: &[char]) -> usize {
    consumed.iter().rev().take_while(|c| **c != '\n').count() + 1
}
