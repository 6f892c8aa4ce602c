use crate::{
    ast::{Accessor, AccessorStep, Argument, ExpressionNode, FunctionCall, IndexValue},
    config::ParserConfig,
    error::{ParseError, ParseErrorKind},
    lexer::Lexer,
};

/// Recursive-descent parser for the inside of a bracketed expression.
///
/// Nested calls (as arguments or as index values) recurse through
/// [`Parser::parse_expression`], which tracks nesting depth and gives up with
/// `MaxDepthExceeded` past the configured limit.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_config(lexer, &ParserConfig::default())
    }

    pub fn with_config(lexer: Lexer<'a>, config: &ParserConfig) -> Self {
        Parser {
            lexer,
            depth: 0,
            max_depth: config.max_depth,
        }
    }

    /// Byte offset the parser has reached
    pub fn position(&self) -> usize {
        self.lexer.position()
    }

    /// Parses an expression that was opened by `[` (already consumed) and
    /// must be closed by `]` at the very end of the input.
    pub fn parse_enclosed_expression(&mut self) -> Result<ExpressionNode, ParseError> {
        let node = self.parse_expression()?;
        self.lexer.skip_whitespace();

        match self.lexer.current_char() {
            None => return Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput)),
            Some(']') => self.lexer.advance(),
            Some(_) => return Err(self.lexer.error(ParseErrorKind::TrailingCharacters)),
        }

        if !self.lexer.is_at_end() {
            return Err(self.lexer.error(ParseErrorKind::TrailingCharacters));
        }
        Ok(node)
    }

    /// Parses `name(args)` plus any accessors that follow it.
    pub fn parse_expression(&mut self) -> Result<ExpressionNode, ParseError> {
        if self.depth >= self.max_depth {
            return Err(self.lexer.error(ParseErrorKind::MaxDepthExceeded));
        }

        self.depth += 1;
        let result = self.parse_call_and_accessor();
        self.depth -= 1;
        result
    }

    fn parse_call_and_accessor(&mut self) -> Result<ExpressionNode, ParseError> {
        self.lexer.skip_whitespace();
        let call = self.parse_function_call()?;
        self.lexer.skip_whitespace();
        let accessor = self.parse_accessor()?;
        Ok(ExpressionNode::new(call, accessor))
    }

    fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        // `true` and `false` are accepted as names by the same pattern
        let name = match self.lexer.read_function_name() {
            Some(name) => name,
            None if self.lexer.is_at_end() => {
                return Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput));
            }
            None => return Err(self.lexer.error(ParseErrorKind::InvalidFunctionName)),
        };

        self.lexer.skip_whitespace();
        if !self.lexer.eat('(') {
            return Err(self.lexer.error(ParseErrorKind::ExpectedOpenParen));
        }

        self.lexer.skip_whitespace();
        let args = match self.lexer.current_char() {
            None | Some(')') => vec![],
            Some(_) => self.parse_arguments()?,
        };

        self.lexer.skip_whitespace();
        if !self.lexer.eat(')') {
            return Err(self.lexer.error(ParseErrorKind::ExpectedCloseParen));
        }

        Ok(FunctionCall::new(name, args))
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, ParseError> {
        let mut args = vec![self.parse_argument()?];

        loop {
            self.lexer.skip_whitespace();
            if !self.lexer.eat(',') {
                break;
            }
            self.lexer.skip_whitespace();
            args.push(self.parse_argument()?);
        }
        Ok(args)
    }

    fn parse_argument(&mut self) -> Result<Argument, ParseError> {
        match self.lexer.current_char() {
            None => Err(self.lexer.error(ParseErrorKind::UnexpectedEndOfInput)),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                Ok(Argument::Num(self.lexer.read_number()?))
            }
            Some('\'') => Ok(Argument::Str(self.lexer.read_quoted_string()?)),
            Some(_) if !self.lexer.at_function_call() => match self.lexer.read_boolean() {
                Some(value) => Ok(Argument::Bool(value)),
                None => Err(self.lexer.error(ParseErrorKind::InvalidArgument)),
            },
            Some(_) => Ok(Argument::Expr(self.parse_expression()?)),
        }
    }

    /// Parses a chain of `.member` and `[index]` steps. Returns `None` when
    /// the cursor isn't on either.
    pub fn parse_accessor(&mut self) -> Result<Option<Accessor>, ParseError> {
        let mut steps = vec![];

        loop {
            match self.lexer.current_char() {
                Some('.') => {
                    self.lexer.advance();
                    self.lexer.skip_whitespace();
                    let Some(name) = self.lexer.read_member_name() else {
                        return Err(self.lexer.error(ParseErrorKind::InvalidMemberName));
                    };
                    steps.push(AccessorStep::Member(name.to_string()));
                }
                Some('[') => {
                    self.lexer.advance();
                    self.lexer.skip_whitespace();
                    let value = self.parse_index_value()?;
                    self.lexer.skip_whitespace();
                    if !self.lexer.eat(']') {
                        return Err(self.lexer.error(ParseErrorKind::UnterminatedIndex));
                    }
                    steps.push(AccessorStep::Index(value));
                }
                _ => break,
            }
            self.lexer.skip_whitespace();
        }

        Ok(Accessor::new(steps))
    }

    fn parse_index_value(&mut self) -> Result<IndexValue, ParseError> {
        match self.lexer.current_char() {
            None => Err(self.lexer.error(ParseErrorKind::UnterminatedIndex)),
            Some(_) if self.lexer.at_function_call() => {
                Ok(IndexValue::Expr(self.parse_expression()?))
            }
            Some(ch) if ch.is_ascii_digit() || ch == '-' => {
                Ok(IndexValue::Num(self.lexer.read_number()?))
            }
            Some('\'') => Ok(IndexValue::PropertyName(self.lexer.read_quoted_string()?)),
            Some(_) => Err(self.lexer.error(ParseErrorKind::InvalidIndexValue)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<ExpressionNode, ParseError> {
        Parser::new(Lexer::new(input)).parse_expression()
    }

    #[test]
    fn stops_after_expression() {
        let mut parser = Parser::new(Lexer::new("foo(1)]rest"));
        let node = parser.parse_expression().unwrap();
        assert_eq!(node.call.name, "foo");
        assert_eq!(parser.position(), 6);
    }

    #[test]
    fn depth_is_restored_after_nested_calls() {
        let mut parser = Parser::with_config(
            Lexer::new("a(b(c()), d(e()))"),
            &ParserConfig::default().with_max_depth(3),
        );
        assert!(parser.parse_expression().is_ok());
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn depth_limit_is_inclusive() {
        let config = ParserConfig::default().with_max_depth(2);
        assert!(Parser::with_config(Lexer::new("a(b())"), &config)
            .parse_expression()
            .is_ok());

        let err = Parser::with_config(Lexer::new("a(b(c()))"), &config)
            .parse_expression()
            .unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MaxDepthExceeded);
        assert_eq!(err.offset, 4);
    }

    #[test]
    fn accessor_absent() {
        assert_eq!(parse("foo()").unwrap().accessor, None);
    }

    #[test]
    fn empty_argument_is_invalid() {
        let err = parse("concat('abc', , 'def')").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidArgument);
        assert_eq!(err.offset, 14);
    }
}
