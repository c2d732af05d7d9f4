use std::fmt;

/// A value supplied from outside could not be turned into a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentError {
    pub problem: String,
    pub details: String,
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.problem, self.details)
    }
}

impl std::error::Error for ArgumentError {}
