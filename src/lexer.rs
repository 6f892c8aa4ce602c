//! Character-level scanning for the expression language.
//!
//! The [`Lexer`] is a cursor over the statement text. It knows how to
//! recognize the handful of token shapes the grammar has (function names,
//! member names, numbers, booleans, quoted strings) and leaves all decisions
//! about what comes next to the parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, ParseErrorKind};

/// `name` or `namespace.name`
static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9]*(\.[a-zA-Z0-9]+)?").unwrap());

static MEMBER_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+").unwrap());

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer { input, position: 0 }
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    pub fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if is_whitespace(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Consumes `expected` if it is the current character.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Builds an error at the cursor, quoting the current character.
    pub fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(kind, self.position)
    }

    pub fn error_at(&self, kind: ParseErrorKind, offset: usize) -> ParseError {
        let found = self.input[offset..].chars().next().map(String::from);
        ParseError::new(kind, offset, found)
    }

    fn take_match(&mut self, pattern: &Regex) -> Option<&'a str> {
        let rest = self.rest();
        let m = pattern.find(rest)?;
        self.position += m.end();
        Some(&rest[..m.end()])
    }

    /// Reads a function name (`[a-zA-Z][a-zA-Z0-9]*(\.[a-zA-Z0-9]+)?`).
    ///
    /// `true` and `false` match this shape too, so they come back as names here.
    pub fn read_function_name(&mut self) -> Option<&'a str> {
        self.take_match(&FUNCTION_NAME)
    }

    /// Reads a member name (`[a-zA-Z0-9_-]+`).
    pub fn read_member_name(&mut self) -> Option<&'a str> {
        self.take_match(&MEMBER_NAME)
    }

    /// True when the cursor sits on a function name followed by `(`.
    /// Whitespace between the two is allowed. Nothing is consumed.
    pub fn at_function_call(&self) -> bool {
        let rest = self.rest();
        let Some(m) = FUNCTION_NAME.find(rest) else {
            return false;
        };
        rest[m.end()..].trim_start_matches(is_whitespace).starts_with('(')
    }

    /// Reads `-?[0-9]+` as a signed 64-bit integer.
    pub fn read_number(&mut self) -> Result<i64, ParseError> {
        let start = self.position;
        self.eat('-');

        let digits_start = self.position;
        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.input[start..self.position];
        if self.position == digits_start {
            return Err(ParseError::new(
                ParseErrorKind::InvalidNumber,
                start,
                Some(text.to_string()),
            ));
        }

        text.parse::<i64>().map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidNumber, start, Some(text.to_string()))
        })
    }

    /// Reads the literal `true` or `false`, as long as it isn't the prefix of
    /// a longer word. Consumes nothing on a miss.
    pub fn read_boolean(&mut self) -> Option<bool> {
        let rest = self.rest();
        let (value, len) = if rest.starts_with("true") {
            (true, 4)
        } else if rest.starts_with("false") {
            (false, 5)
        } else {
            return None;
        };

        if rest[len..].chars().next().is_some_and(is_word_char) {
            return None;
        }
        self.position += len;
        Some(value)
    }

    /// Reads a single-quoted string starting at the opening `'`.
    ///
    /// Inside the body `''` stands for one literal `'`; anything else,
    /// line breaks included, is taken as is.
    pub fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        let start = self.position;
        if !self.eat('\'') {
            return Err(self.error(ParseErrorKind::InvalidArgument));
        }

        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            self.advance();
            if ch == '\'' {
                if self.current_char() == Some('\'') {
                    self.advance();
                    result.push('\'');
                } else {
                    return Ok(result);
                }
            } else {
                result.push(ch);
            }
        }

        Err(ParseError::new(
            ParseErrorKind::UnterminatedString,
            start,
            Some(self.input[start..].to_string()),
        ))
    }
}
