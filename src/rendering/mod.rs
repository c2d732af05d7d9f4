//! The fixed display skeleton and the renderers that fill it in

use tracing::debug;

mod bordered;
mod character;
mod renderer;

pub use bordered::StringRenderer;
pub use character::CharRenderer;
pub use renderer::Render;

/// Number of times the body of a display is printed.
pub const REPETITIONS: usize = 5;

/// Run the skeleton: open once, print REPETITIONS times, close once, and
/// concatenate the results in call order. The renderer decides what each
/// step looks like; the order and count never change.
pub fn render(renderer: &impl Render) -> String {
    debug!(renderer = renderer.name(), "Rendering display");

    let mut output = renderer.open();

    for _ in 0..REPETITIONS {
        output.push_str(&renderer.print());
    }

    output.push_str(&renderer.close());

    output
}

/// A renderer bundled with the skeleton, for callers that would rather hold
/// one value than pass the renderer in each time.
#[derive(Debug, Clone)]
pub struct Display<R> {
    renderer: R,
}

impl<R: Render> Display<R> {
    pub fn new(renderer: R) -> Display<R> {
        Display { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn display(&self) -> String {
        render(&self.renderer)
    }

    pub fn into_inner(self) -> R {
        self.renderer
    }
}
