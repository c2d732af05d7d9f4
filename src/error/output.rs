use std::fmt;

/// Filling in the annotation template failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl std::error::Error for OutputError {}
