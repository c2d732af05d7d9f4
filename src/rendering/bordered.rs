//! Display of a string inside a drawn box

use super::Render;

/// Repeats a line of text between two horizontal borders. The border is
/// recomputed on every call; its fill length is the number of characters
/// (not bytes) in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringRenderer {
    text: String,
}

impl StringRenderer {
    pub fn new(text: impl Into<String>) -> StringRenderer {
        StringRenderer { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn border(&self) -> String {
        let width = self
            .text
            .chars()
            .count();

        let mut line = String::with_capacity(width + 3);
        line.push('+');
        line.push_str(&"-".repeat(width));
        line.push('+');
        line.push('\n');
        line
    }
}

impl Render for StringRenderer {
    fn open(&self) -> String {
        self.border()
    }

    fn print(&self) -> String {
        format!("| {} |\n", self.text)
    }

    fn close(&self) -> String {
        self.border()
    }

    fn name(&self) -> &'static str {
        "string"
    }
}
