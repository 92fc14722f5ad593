use crate::{
    ast::{tag, Value},
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::lexer::Token,
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Recursive-descent parser over a filtered token sequence.
///
/// The parser tracks its position as an index into the token list so that
/// every [`SyntaxError`] can carry the full sequence and the exact failing
/// position.
///
/// Grammar, with all binary operators left-associative:
///
/// ```text
/// statement  := symbol "=" expression | expression
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/" | "%") factor)*
/// factor     := "-" factor
///             | "(" expression ")"
///             | "[" expression ("," expression)* "]"
///             | constant
///             | symbol [ "(" expression ("," expression)* ")" ]
/// ```
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

/// Parses a token sequence into exactly one statement.
///
/// Whitespace and comment tokens are filtered out first. Fails if any token
/// remains unconsumed after the statement.
///
/// # Errors
/// Returns a [`SyntaxError`] when an expected token is absent or when input
/// remains after a complete statement.
///
/// ## Example
/// ```
/// use symba::ast::{tag, Value};
/// use symba::interpreter::{lexer::tokenize, parser::parse};
///
/// let statement = parse(tokenize("f(1, 2)").unwrap()).unwrap();
/// assert_eq!(statement,
///            Value::apply(Value::symbol("f"),
///                         vec![Value::Constant(1.0), Value::Constant(2.0)]));
/// ```
pub fn parse(tokens: Vec<(Token, usize)>) -> ParseResult<Value> {
    Parser::new(tokens).parse()
}

impl Parser {
    /// Builds a parser over `tokens`, dropping whitespace and comments.
    #[must_use]
    pub fn new(tokens: Vec<(Token, usize)>) -> Self {
        let tokens = tokens.into_iter()
                           .map(|(token, _)| token)
                           .filter(|token| {
                               !matches!(token, Token::Whitespace | Token::Comment(_))
                           })
                           .collect();
        Self { tokens, position: 0 }
    }

    /// Parses one statement and verifies the whole sequence was consumed.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] for malformed input or trailing tokens.
    pub fn parse(mut self) -> ParseResult<Value> {
        let statement = self.parse_statement()?;
        if self.position < self.tokens.len() {
            return Err(self.error(SyntaxErrorKind::TrailingTokens));
        }
        Ok(statement)
    }

    /// Parses `statement := symbol "=" expression | expression`.
    ///
    /// Assignment is recognized only by two-token lookahead: whatever token
    /// sits at the current position, if the *next* one is `=` the statement
    /// is an assignment and the current token must then be a symbol. Any
    /// other shape falls through to ordinary expression parsing.
    fn parse_statement(&mut self) -> ParseResult<Value> {
        if matches!(self.token_at(self.position + 1), Some(Token::Equals)) {
            let name = self.parse_symbol()?;
            self.position += 1; // the '='
            let expression = self.parse_expression()?;
            return Ok(Value::apply(Value::symbol(tag::LET), vec![name, expression]));
        }
        self.parse_expression()
    }

    /// Parses `expression := term (("+" | "-") term)*`, building left-nested
    /// applications in encounter order.
    fn parse_expression(&mut self) -> ParseResult<Value> {
        let mut value = self.parse_term()?;
        loop {
            let operator = match self.peek() {
                Some(Token::Plus) => tag::ADD,
                Some(Token::Minus) => tag::SUB,
                _ => break,
            };
            self.position += 1;
            let right = self.parse_term()?;
            value = Value::apply(Value::symbol(operator), vec![value, right]);
        }
        Ok(value)
    }

    /// Parses `term := factor (("*" | "/" | "%") factor)*`.
    fn parse_term(&mut self) -> ParseResult<Value> {
        let mut value = self.parse_factor()?;
        loop {
            let operator = match self.peek() {
                Some(Token::Star) => tag::MUL,
                Some(Token::Slash) => tag::DIV,
                Some(Token::Percent) => tag::MOD,
                _ => break,
            };
            self.position += 1;
            let right = self.parse_factor()?;
            value = Value::apply(Value::symbol(operator), vec![value, right]);
        }
        Ok(value)
    }

    /// Parses a factor: unary minus (right-recursive, so `- - x` nests),
    /// a parenthesized expression, a vector literal, a constant, or a symbol
    /// optionally applied to a parenthesized argument list.
    fn parse_factor(&mut self) -> ParseResult<Value> {
        match self.peek() {
            Some(Token::Minus) => {
                self.position += 1;
                let first = self.parse_factor()?;
                Ok(Value::apply(Value::symbol(tag::NEG), vec![first]))
            },
            Some(Token::LParen) => {
                self.position += 1;
                let expression = self.parse_expression()?;
                self.expect(&Token::RParen, SyntaxErrorKind::ExpectedClosingParen)?;
                Ok(expression)
            },
            Some(Token::LBracket) => {
                self.position += 1;
                let expressions = self.parse_comma_separated()?;
                self.expect(&Token::RBracket, SyntaxErrorKind::ExpectedClosingBracket)?;
                Ok(Value::apply(Value::symbol(tag::VEC), expressions))
            },
            Some(Token::Constant(c)) => {
                let constant = Value::Constant(*c);
                self.position += 1;
                Ok(constant)
            },
            Some(Token::Symbol(_)) => {
                let symbol = self.parse_symbol()?;
                if matches!(self.peek(), Some(Token::LParen)) {
                    self.position += 1;
                    let expressions = self.parse_comma_separated()?;
                    self.expect(&Token::RParen, SyntaxErrorKind::ExpectedClosingParen)?;
                    return Ok(Value::apply(symbol, expressions));
                }
                Ok(symbol)
            },
            Some(_) => Err(self.error(SyntaxErrorKind::UnexpectedToken)),
            None => Err(self.error(SyntaxErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Parses `expression ("," expression)*`. Always at least one element;
    /// empty argument lists are not part of the grammar.
    fn parse_comma_separated(&mut self) -> ParseResult<Vec<Value>> {
        let mut expressions = vec![self.parse_expression()?];
        while matches!(self.peek(), Some(Token::Comma)) {
            self.position += 1;
            expressions.push(self.parse_expression()?);
        }
        Ok(expressions)
    }

    /// Consumes one symbol token, failing with `ExpectedSymbol` otherwise.
    fn parse_symbol(&mut self) -> ParseResult<Value> {
        match self.peek() {
            Some(Token::Symbol(name)) => {
                let symbol = Value::Symbol(name.clone());
                self.position += 1;
                Ok(symbol)
            },
            _ => Err(self.error(SyntaxErrorKind::ExpectedSymbol)),
        }
    }

    fn expect(&mut self, token: &Token, kind: SyntaxErrorKind) -> ParseResult<()> {
        if self.peek() == Some(token) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.error(kind))
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.token_at(self.position)
    }

    fn token_at(&self, position: usize) -> Option<&Token> {
        self.tokens.get(position)
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError { kind,
                      position: self.position,
                      tokens: self.tokens.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parsed(source: &str) -> Value {
        parse(tokenize(source).unwrap()).unwrap()
    }

    fn failure(source: &str) -> SyntaxError {
        parse(tokenize(source).unwrap()).unwrap_err()
    }

    #[test]
    fn binary_operators_nest_to_the_left() {
        let inner = Value::apply(Value::symbol(tag::SUB),
                                 vec![Value::Constant(1.0), Value::Constant(2.0)]);
        let expected = Value::apply(Value::symbol(tag::SUB),
                                    vec![inner, Value::Constant(3.0)]);
        assert_eq!(parsed("1 - 2 - 3"), expected);
        assert_eq!(parsed("1-2-3"), expected);
    }

    #[test]
    fn unary_minus_is_right_recursive() {
        let expected =
            Value::apply(Value::symbol(tag::NEG),
                         vec![Value::apply(Value::symbol(tag::NEG),
                                           vec![Value::symbol("x")])]);
        assert_eq!(parsed("- - x"), expected);
    }

    #[test]
    fn assignment_needs_a_symbol_on_the_left() {
        let expected = Value::apply(Value::symbol(tag::LET),
                                    vec![Value::symbol("x"), Value::Constant(5.0)]);
        assert_eq!(parsed("x = 5"), expected);
        assert_eq!(failure("3 = 5").kind, SyntaxErrorKind::ExpectedSymbol);
    }

    #[test]
    fn vectors_and_calls_become_applications() {
        assert_eq!(parsed("[1, 2, 3]"),
                   Value::apply(Value::symbol(tag::VEC),
                                vec![Value::Constant(1.0),
                                     Value::Constant(2.0),
                                     Value::Constant(3.0)]));
        assert_eq!(parsed("f(1, 2)"),
                   Value::apply(Value::symbol("f"),
                                vec![Value::Constant(1.0), Value::Constant(2.0)]));
    }

    #[test]
    fn errors_carry_the_token_list_and_position() {
        let error = failure("3 +");
        assert_eq!(error.kind, SyntaxErrorKind::UnexpectedEndOfInput);
        assert_eq!(error.position, 2);
        assert_eq!(error.tokens.len(), 2);

        assert_eq!(failure("(1+2").kind, SyntaxErrorKind::ExpectedClosingParen);
        assert_eq!(failure("[1, 2").kind, SyntaxErrorKind::ExpectedClosingBracket);
        assert_eq!(failure("1 2").kind, SyntaxErrorKind::TrailingTokens);
    }

    #[test]
    fn reserved_operators_are_lexed_but_not_parsed() {
        // `^` and `->` are in the token set but no grammar rule accepts them.
        assert_eq!(failure("2 ^ 3").kind, SyntaxErrorKind::TrailingTokens);
        assert_eq!(failure("x -> x").kind, SyntaxErrorKind::TrailingTokens);
    }
}
