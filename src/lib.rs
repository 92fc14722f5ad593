//! # symba
//!
//! symba is a small symbolic-expression evaluator written in Rust.
//! It tokenizes an infix arithmetic surface syntax, parses it into a term
//! tree, and reduces that tree to a normal form through an ordered
//! term-rewriting system supporting constant folding, algebraic identities,
//! and runtime variable binding.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed and reduced terms.
///
/// This module declares the `Value` enum that represents both the syntactic
/// structure of source code and the runtime values the rewriting system
/// operates on; there is no separate AST and value world.
///
/// # Responsibilities
/// - Defines the four term variants: constant, symbol, application,
///   abstraction.
/// - Provides structural-equivalence testing, the basis of the fixed-point
///   reduction loop.
/// - Renders terms back to surface syntax through `Display`.
pub mod ast;
/// Provides unified error types for lexing, parsing and reduction.
///
/// This module defines all errors that can be raised while evaluating a
/// statement. It standardizes error reporting and carries detailed
/// information about failures, including source offsets, token sequences and
/// failing positions for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, reducer).
/// - Attaches offsets, token lists and positions for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of statement evaluation.
///
/// This module ties together lexing, parsing and reduction to provide a
/// complete pipeline from one line of source text to its reduction trace.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, and reduction engine.
/// - Provides entry points for reading and reducing statements.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use ast::Value;
pub use interpreter::reducer::Session;

use interpreter::{lexer::tokenize, parser::parse};

/// Reads one statement of source text into a term, without reducing it.
///
/// Runs the lexer and the parser only; the result is the raw parse tree.
///
/// # Errors
/// Returns a [`error::LexError`] if the text cannot be tokenized, or a
/// [`error::SyntaxError`] if the token stream is not exactly one statement.
///
/// # Examples
/// ```
/// use symba::{read, Value};
///
/// let statement = read("[1, 2]").unwrap();
/// assert_eq!(statement.to_string(), "$vec(1, 2)");
///
/// assert!(read("(1 + 2").is_err());
/// ```
pub fn read(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let statement = parse(tokens)?;
    Ok(statement)
}

/// Evaluates one statement against a session, returning the reduction trace.
///
/// The trace starts with the parsed statement and ends with its normal form;
/// each entry is the term after one rewrite. Bindings made by assignment
/// statements persist in `session` for later calls. A statement that fails
/// to lex or parse leaves the session untouched; a statement aborted by the
/// step ceiling may already have bound names as a side effect.
///
/// # Errors
/// Returns an error if the statement does not lex or parse, or if the
/// session carries a step ceiling and reduction exceeds it.
///
/// # Examples
/// ```
/// use symba::{eval_statement, Session, Value};
///
/// let mut session = Session::new();
///
/// let trace = eval_statement("2 + 3", &mut session).unwrap();
/// assert_eq!(trace.last(), Some(&Value::Constant(5.0)));
///
/// // `a / a` is deliberately not simplified.
/// let trace = eval_statement("a / a", &mut session).unwrap();
/// assert_eq!(trace.last().unwrap().to_string(), "(a / a)");
/// ```
pub fn eval_statement(source: &str,
                      session: &mut Session)
                      -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let statement = read(source)?;
    let trace = session.reduce(statement)?;
    Ok(trace)
}
