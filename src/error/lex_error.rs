#[derive(Debug, Clone, PartialEq, Eq)]
/// Raised when no token pattern matches the remaining input.
///
/// Tokenization is all-or-nothing: the first unmatched character aborts the
/// whole call and no partial token list is returned.
pub struct LexError {
    /// Byte offset of the first unmatched character.
    pub offset: usize,
    /// The unconsumed remainder of the source, starting at `offset`.
    pub suffix: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Unexpected input at offset {}. Starting here: \"{}\"",
               self.offset, self.suffix)
    }
}

impl std::error::Error for LexError {}
