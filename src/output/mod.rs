//! Annotated output, describing the hook calls alongside the display

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::error::OutputError;
use crate::rendering::{render, Render, REPETITIONS};

static TEMPLATE: &'static str = r#"{name} display: 1 open, {prints} print, 1 close
{output}"#;

#[derive(Serialize)]
struct Context {
    name: String,
    prints: usize,
    output: String,
}

/// Render the display and prefix it with a line naming the renderer and how
/// many times each hook was called.
pub fn annotate(renderer: &impl Render) -> Result<String, OutputError> {
    let output = render(renderer);

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("annotate", TEMPLATE)
        .map_err(|error| OutputError {
            problem: "Invalid annotation template".to_string(),
            details: error.to_string(),
        })?;

    let context = Context {
        name: renderer
            .name()
            .to_string(),
        prints: REPETITIONS,
        output,
    };

    let result = tt
        .render("annotate", &context)
        .map_err(|error| OutputError {
            problem: "Unable to fill annotation template".to_string(),
            details: error.to_string(),
        })?;

    debug!(bytes = result.len(), "Annotated display");

    Ok(result)
}
