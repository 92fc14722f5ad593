#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while reducing a term.
pub enum RuntimeError {
    /// The reduction trace grew past an explicitly requested step ceiling
    /// without reaching a normal form.
    ///
    /// Only raised by sessions built with a step limit; the default session
    /// has no ceiling and will loop forever on a cyclic rule set.
    DidNotConverge {
        /// The ceiling that was exceeded.
        steps: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DidNotConverge { steps } => {
                write!(f, "Reduction did not converge within {steps} rewrite steps.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
