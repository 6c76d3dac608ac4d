use crate::input::Input;

/// Options to configure the output of pretty errors
pub struct PrettyOptions {
    /// The color to use on the indicators for the line number at the beginning
    line_number_color: &'static str,
    /// The color code used for everything that is not usually colored
    default_color: &'static str,
    /// The color used on the border between the line number and the displayed input
    separator_color: &'static str,
    /// The color of the marker underlining the unconsumed input
    error_indicator_color: &'static str,
    /// The color of the `[line:col]` prefix of the message
    position_color: &'static str,
    /// Whether the marker starts with a ^ pointing at the first unconsumed code point
    show_caret: bool,
}

impl PrettyOptions {
    /// No colors
    pub fn no_color() -> Self {
        PrettyOptions {
            line_number_color: "",
            default_color: "",
            separator_color: "",
            error_indicator_color: "",
            position_color: "",
            show_caret: true,
        }
    }

    pub fn with_caret(mut self, show_caret: bool) -> Self {
        self.show_caret = show_caret;
        self
    }
}

impl Default for PrettyOptions {
    fn default() -> Self {
        PrettyOptions {
            line_number_color: "\x1b[37;1m",
            default_color: "\x1b[0m",
            separator_color: "\x1b[34;1m",
            error_indicator_color: "\x1b[31m",
            position_color: "\x1b[33m",
            show_caret: true,
        }
    }
}

/// Widest slice of a line that is displayed around the error.
const WINDOW: usize = 80;

/// Generate a pretty error for the position of `at` with a specified message.
#[must_use]
pub fn pretty_error(at: &Input, message: &str, options: &PrettyOptions) -> String {
    let display = show_position(at, options);
    let yellow = options.position_color;
    let reset = options.default_color;
    format!(
        "{display}\n{yellow}[{line}:{col}]{reset} {message}",
        line = at.line(),
        col = at.col()
    )
}

/// Generate a display pointing out the unconsumed part of the line `at` sits on.
#[must_use]
pub fn show_position(at: &Input, options: &PrettyOptions) -> String {
    let bold_white = options.line_number_color;
    let reset = options.default_color;
    let blue = options.separator_color;
    let red = options.error_indicator_color;

    let line_start = at.offset() + 1 - at.col();
    let before = &at.consumed()[line_start..];
    let after: Vec<char> = at
        .remaining()
        .iter()
        .copied()
        .take_while(|c| *c != '\n')
        .collect();

    let skipped = before.len().saturating_sub(WINDOW / 2);
    let shown_before: String = before[skipped..].iter().collect();
    let shown_after: String = after
        .iter()
        .take(WINDOW - (before.len() - skipped))
        .collect();
    let shown_after = shown_after.trim_end();

    let line_num = at.line().to_string();
    let line_pad = format!("{bold_white}{line_num} {blue}|{reset} ");
    let outer_pad = " ".repeat(line_num.len() + 3);

    let spaces = " ".repeat(before.len() - skipped);
    let head = if options.show_caret { "^" } else { "-" };
    let underline = "-".repeat(shown_after.chars().count().saturating_sub(1));
    format!(
        "{line_pad}{shown_before}{shown_after}\n{outer_pad}{spaces}{red}{head}{underline}{reset}"
    )
}
