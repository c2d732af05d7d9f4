//! The hooks a display supplies to the rendering skeleton

/// Trait for the pieces of a display (the opening frame, the repeated body,
/// the closing frame). Implementations hold only immutable configuration, so
/// every call returns the same String for the same instance.
pub trait Render {
    /// Emitted once, before anything else
    fn open(&self) -> String;

    /// Emitted once per repetition
    fn print(&self) -> String;

    /// Emitted once, after the last repetition
    fn close(&self) -> String;

    /// Short name used when describing the display
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<R: Render + ?Sized> Render for &R {
    fn open(&self) -> String {
        (**self).open()
    }

    fn print(&self) -> String {
        (**self).print()
    }

    fn close(&self) -> String {
        (**self).close()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<R: Render + ?Sized> Render for Box<R> {
    fn open(&self) -> String {
        (**self).open()
    }

    fn print(&self) -> String {
        (**self).print()
    }

    fn close(&self) -> String {
        (**self).close()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
