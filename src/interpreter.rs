/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each paired with its starting byte offset. Whitespace and
/// comments are emitted too and left for the parser to discard. This is the
/// first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   offset.
/// - Handles numeric literals (including `NaN` and signed `Infinity`),
///   identifiers, operators, comments and whitespace.
/// - Reports a lexical error carrying the unconsumed suffix for invalid
///   input.
pub mod lexer;
/// The parser module builds the term tree from tokens.
///
/// The parser consumes the token stream produced by the lexer via recursive
/// descent and constructs a single [`crate::ast::Value`] statement. Binary
/// operators, unary minus, vector literals, function calls and assignments
/// all become applications of well-known operator tags.
///
/// # Responsibilities
/// - Converts tokens into one structured `Value` statement.
/// - Validates the grammar, reporting errors with the token sequence and
///   failing position.
/// - Rejects input with tokens left over after a complete statement.
pub mod parser;
/// The reducer module rewrites terms to normal form.
///
/// The reduction engine owns the ordered rule table of substitution and
/// operation rules and applies them repeatedly to a term until a full pass
/// changes nothing, collecting the ordered trace of every intermediate
/// value. It is the core execution engine of the evaluator and the only
/// component holding session state.
///
/// # Responsibilities
/// - Seeds and owns the session's rule table (`pi`, `e`, and the `$let`,
///   `$neg`, `$add`, `$sub`, `$mul`, `$div` operations).
/// - Performs constant folding, algebraic identities and variable
///   substitution under a restart-from-the-top fixed-point loop.
/// - Optionally enforces an opt-in step ceiling instead of looping forever.
pub mod reducer;
