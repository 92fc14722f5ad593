use crate::interpreter::lexer::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Classifies the ways the parser can reject a token stream.
pub enum SyntaxErrorKind {
    /// Found a token no grammar rule can start with.
    UnexpectedToken,
    /// Ran out of tokens while a rule still expected one.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen,
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket,
    /// The name position of an assignment did not hold a symbol.
    ExpectedSymbol,
    /// Tokens remained after a complete statement was parsed.
    TrailingTokens,
}

#[derive(Debug, Clone, PartialEq)]
/// Raised when parsing encounters an unexpected or missing token, or when
/// input remains after a complete statement.
///
/// Carries the full filtered token sequence and the failing token index so
/// the exact failure point can be reconstructed for diagnostics.
pub struct SyntaxError {
    /// What went wrong.
    pub kind: SyntaxErrorKind,
    /// Index into `tokens` at which parsing failed.
    pub position: usize,
    /// The complete token sequence the parser was consuming, with whitespace
    /// and comments already filtered out.
    pub tokens: Vec<Token>,
}

impl SyntaxError {
    fn found(&self) -> String {
        self.tokens.get(self.position)
                   .map_or_else(|| "end of input".to_string(), |token| format!("'{token}'"))
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            SyntaxErrorKind::UnexpectedToken => {
                write!(f,
                       "Syntax error at token {}: unexpected {}.",
                       self.position,
                       self.found())
            },
            SyntaxErrorKind::UnexpectedEndOfInput => {
                write!(f, "Syntax error: unexpected end of input.")
            },
            SyntaxErrorKind::ExpectedClosingParen => {
                write!(f,
                       "Syntax error at token {}: expected closing parenthesis ')' but found {}.",
                       self.position,
                       self.found())
            },
            SyntaxErrorKind::ExpectedClosingBracket => {
                write!(f,
                       "Syntax error at token {}: expected closing bracket ']' but found {}.",
                       self.position,
                       self.found())
            },
            SyntaxErrorKind::ExpectedSymbol => {
                write!(f,
                       "Syntax error at token {}: expected a symbol but found {}.",
                       self.position,
                       self.found())
            },
            SyntaxErrorKind::TrailingTokens => {
                write!(f,
                       "Syntax error at token {}: extra tokens after a complete statement, starting with {}.",
                       self.position,
                       self.found())
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
