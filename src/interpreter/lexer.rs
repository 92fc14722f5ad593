use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. Whitespace and
/// comments are emitted like any other token and filtered out by the parser,
/// so the raw token stream covers the whole input.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: `NaN`, optionally-signed `Infinity`, or a
    /// decimal literal such as `42`, `.5` or `2.1e-10`.
    ///
    /// A sign is absorbed only for `Infinity`; negative decimals are built
    /// by the grammar's unary-minus rule, which keeps `1-2-3` five tokens
    /// and left-associative.
    #[token("NaN", |_| f64::NAN)]
    #[regex(r"-?Infinity", parse_constant)]
    #[regex(r"([0-9]*\.[0-9]+|[0-9]+)([eE][+-]?[0-9]+)?", parse_constant)]
    Constant(f64),
    /// Identifier tokens; variable or function names such as `x`, `pi` or
    /// `$add`.
    #[regex(r"[$a-zA-Z_][$a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `--` to the end of the line. Kept in the token stream; the parser
    /// discards it.
    #[regex(r"--[^\n]*", |lex| lex.slice().to_string())]
    Comment(String),
    /// Runs of spaces, tabs and newlines. Kept in the token stream; the
    /// parser discards them.
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,
    /// `->` (reserved; unused by the current grammar)
    #[token("->")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `^` (reserved; unused by the current grammar)
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `,`
    #[token(",")]
    Comma,
}

/// Parses a numeric literal from the current token slice.
///
/// Handles plain decimals, exponent forms and `Infinity` with an optional
/// sign; `f64`'s `FromStr` accepts all of them directly.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid constant.
fn parse_constant(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(c) => write!(f, "{c}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Comment(text) => write!(f, "{text}"),
            Self::Whitespace => write!(f, " "),
            Self::Arrow => write!(f, "->"),
            Self::Equals => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Caret => write!(f, "^"),
            Self::Percent => write!(f, "%"),
            Self::Comma => write!(f, ","),
        }
    }
}

/// Converts source text into an ordered token sequence.
///
/// Each token is paired with its starting byte offset in `source`.
/// Whitespace and comment tokens are included; downstream consumers filter
/// them out.
///
/// # Errors
/// Returns a [`LexError`] carrying the unconsumed suffix and its offset as
/// soon as no token pattern matches; no partial token list is produced.
///
/// ## Example
/// ```
/// use symba::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("x + 1").unwrap();
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[2], (Token::Plus, 2));
/// assert!(tokenize("@").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span().start)),
            Err(()) => {
                let offset = lexer.span().start;
                return Err(LexError { offset,
                                      suffix: source[offset..].to_string() });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn numbers_come_in_all_accepted_forms() {
        assert_eq!(kinds("42"), vec![Token::Constant(42.0)]);
        assert_eq!(kinds(".5"), vec![Token::Constant(0.5)]);
        assert_eq!(kinds("2.1e-10"), vec![Token::Constant(2.1e-10)]);
        assert_eq!(kinds("3E+2"), vec![Token::Constant(300.0)]);
    }

    #[test]
    fn special_constants() {
        assert_eq!(kinds("Infinity"), vec![Token::Constant(f64::INFINITY)]);
        assert_eq!(kinds("-Infinity"), vec![Token::Constant(f64::NEG_INFINITY)]);
        assert!(matches!(kinds("NaN").as_slice(), [Token::Constant(c)] if c.is_nan()));
    }

    #[test]
    fn minus_before_digits_stays_an_operator() {
        // Unary minus is a grammar rule, not part of the constant pattern.
        assert_eq!(kinds("-5"), vec![Token::Minus, Token::Constant(5.0)]);
        assert_eq!(kinds("1-2"),
                   vec![Token::Constant(1.0), Token::Minus, Token::Constant(2.0)]);
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert_eq!(kinds("--5"), vec![Token::Comment("--5".to_string())]);
        assert_eq!(kinds("1 -- rest\n2"),
                   vec![Token::Constant(1.0),
                        Token::Whitespace,
                        Token::Comment("-- rest".to_string()),
                        Token::Whitespace,
                        Token::Constant(2.0)]);
    }

    #[test]
    fn symbols_may_carry_dollar_signs() {
        assert_eq!(kinds("$add"), vec![Token::Symbol("$add".to_string())]);
        assert_eq!(kinds("_x1"), vec![Token::Symbol("_x1".to_string())]);
        // Maximal munch: a literal prefix inside a longer identifier does
        // not split off a constant.
        assert_eq!(kinds("NaNo"), vec![Token::Symbol("NaNo".to_string())]);
    }

    #[test]
    fn unmatched_input_aborts_with_offset_and_suffix() {
        let error = tokenize("1 + @rest").unwrap_err();
        assert_eq!(error.offset, 4);
        assert_eq!(error.suffix, "@rest");
    }
}
