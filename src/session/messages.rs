//! Messages dispatched from the UI to the session controller

use std::path::PathBuf;

use crate::domain::Point;
use crate::history::HistoryMode;

/// Everything the UI can ask the controller to do.
#[derive(Clone, Debug)]
pub enum Msg {
    /// Capture mode invoked: hide the window, then freeze a frame.
    CaptureRequested,
    /// The window has left the screen; freeze the frame now.
    WindowHidden,
    /// Press event recorded the selection start point.
    SelectionPressed(Point),
    /// Drag event updated the selection's current point.
    SelectionDragged(Point),
    /// Release event completed the selection.
    SelectionReleased(Point),
    /// Selection abandoned (Escape).
    SelectionCancelled,
    /// History mode switched between table and flat.
    HistoryModeSet(HistoryMode),
    /// History cleared.
    HistoryCleared,
    /// Export the history to the chosen path.
    ExportRequested(PathBuf),
}

impl Msg {
    pub fn pressed(x: i32, y: i32) -> Self {
        Msg::SelectionPressed(Point::new(x, y))
    }

    pub fn dragged(x: i32, y: i32) -> Self {
        Msg::SelectionDragged(Point::new(x, y))
    }

    pub fn released(x: i32, y: i32) -> Self {
        Msg::SelectionReleased(Point::new(x, y))
    }
}
