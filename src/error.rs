/// Lexing errors.
///
/// Defines the error raised when the tokenizer cannot match any token
/// pattern against the remaining input. The error carries the unconsumed
/// suffix and its byte offset so the exact failure point can be reported.
pub mod lex_error;
/// Reduction errors.
///
/// Contains the error raised by the reduction engine when an explicitly
/// requested step ceiling is exceeded. Reduction has no other failure modes;
/// without a ceiling a cyclic rule set simply never terminates.
pub mod runtime_error;
/// Parsing errors.
///
/// Defines all error types that can occur while consuming the token stream.
/// Syntax errors include unexpected or missing tokens and trailing input
/// after a complete statement, and carry the full token sequence plus the
/// failing position for diagnostics.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::{SyntaxError, SyntaxErrorKind};
