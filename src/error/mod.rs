// Errors raised at the edges of the library

mod argument;
mod output;

// Re-export all public symbols
pub use argument::*;
pub use output::*;
