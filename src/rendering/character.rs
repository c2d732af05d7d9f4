//! Display of a single character between angle brackets

use std::str::FromStr;

use crate::error::ArgumentError;

use super::Render;

/// Repeats one character inside `<<` and `>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRenderer {
    character: char,
}

impl CharRenderer {
    pub fn new(character: char) -> CharRenderer {
        CharRenderer { character }
    }

    pub fn character(&self) -> char {
        self.character
    }
}

impl Render for CharRenderer {
    fn open(&self) -> String {
        "<<".to_string()
    }

    fn print(&self) -> String {
        self.character
            .to_string()
    }

    fn close(&self) -> String {
        ">>".to_string()
    }

    fn name(&self) -> &'static str {
        "char"
    }
}

/// Accepts exactly one character; anything else is an invalid argument.
impl FromStr for CharRenderer {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(character), None) => Ok(CharRenderer::new(character)),
            (None, _) => Err(ArgumentError {
                problem: "Expected a single character".to_string(),
                details: "the supplied value was empty".to_string(),
            }),
            (Some(_), Some(_)) => Err(ArgumentError {
                problem: "Expected a single character".to_string(),
                details: format!(
                    "\"{}\" is {} characters long",
                    s,
                    s.chars()
                        .count()
                ),
            }),
        }
    }
}
