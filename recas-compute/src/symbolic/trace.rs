//! Observation of the simplifier's fixed-point loop.

/// Receives the rendered expression after each whole-tree pass.
///
/// The simplifier reports every pass it runs, including the final one whose output matches the
/// pass before it. Callers that do not care pass [`NoTrace`]; a `Vec<String>` collects the
/// intermediate forms for display or debugging.
pub trait PassTrace {
    /// Called after pass number `pass` (starting at 1) with the freshly rendered expression.
    fn record(&mut self, pass: usize, rendered: &str);
}

/// A trace sink that discards every pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl PassTrace for NoTrace {
    fn record(&mut self, _pass: usize, _rendered: &str) {}
}

impl PassTrace for Vec<String> {
    fn record(&mut self, _pass: usize, rendered: &str) {
        self.push(rendered.to_string());
    }
}
