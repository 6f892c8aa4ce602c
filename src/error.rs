use std::fmt;

use thiserror::Error;

/// The kind of failure a parse stopped at.
///
/// Every kind is terminal: the parser never recovers or returns a partial tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// Text where a function name was expected doesn't look like one
    #[error("invalid function name")]
    InvalidFunctionName,

    /// Function name not followed by `(`
    #[error("expected '(' after function name")]
    ExpectedOpenParen,

    /// Argument list not closed by `)`
    #[error("expected ')' to close argument list")]
    ExpectedCloseParen,

    /// Argument is not a number, quoted string, boolean, or nested call
    #[error("invalid argument")]
    InvalidArgument,

    /// `-` without digits, or a value outside the 64-bit range
    #[error("invalid number")]
    InvalidNumber,

    /// Quoted string with no closing `'`
    #[error("unterminated string")]
    UnterminatedString,

    /// `.` not followed by a member name
    #[error("invalid member name")]
    InvalidMemberName,

    /// Index value without a closing `]`
    #[error("unterminated index")]
    UnterminatedIndex,

    /// Index value is not a nested call, number, or quoted property name
    #[error("invalid index value")]
    InvalidIndexValue,

    /// Nesting deeper than the configured limit
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,

    /// Something other than end of input where the statement should end
    #[error("unexpected trailing characters")]
    TrailingCharacters,

    /// Input ran out in the middle of a construct
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A parse failure with enough position information to point at the culprit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,

    /// Byte offset into the original input
    pub offset: usize,

    /// Offending text at `offset`, if any (none at end of input)
    pub found: Option<String>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize, found: Option<String>) -> Self {
        ParseError {
            kind,
            offset,
            found,
        }
    }

    /// Renders a pointer-style diagnostic for `input`, the string that was parsed.
    ///
    /// ```
    /// use dsc_expression::classify;
    ///
    /// let input = "[concat('a' 'b')]";
    /// let err = classify(input).unwrap_err();
    /// assert_eq!(
    ///     err.render(input),
    ///     "[concat('a' 'b')]\n            ^\nexpected ')' to close argument list at offset 12 (found ''')"
    /// );
    /// ```
    pub fn render(&self, input: &str) -> String {
        let offset = clamp_to_char_boundary(input, self.offset);
        let line_start = input[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = input[offset..]
            .find('\n')
            .map_or(input.len(), |i| offset + i);
        let line = &input[line_start..line_end];
        let column = input[line_start..offset].chars().count();

        format!("{}\n{}^\n{}", line, " ".repeat(column), self)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at offset {}", self.kind, self.offset)?;
        if let Some(found) = &self.found {
            write!(f, " (found '{}')", found)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

fn clamp_to_char_boundary(input: &str, offset: usize) -> usize {
    let mut offset = offset.min(input.len());
    while !input.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
