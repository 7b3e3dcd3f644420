//! Generic renderer trait so the frame loop never depends on a concrete view
use ratatui::Frame;

/// Draws a read-only view of `State` into a ratatui frame.
pub trait GameRenderer<State> {
    /// `tick` counts frames since start; purely visual animation hangs off it.
    fn render(&self, frame: &mut Frame, state: &State, tick: u64);
}
