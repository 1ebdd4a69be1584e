//! Session controller: the Idle → Selecting → Captured state machine
//!
//! The controller owns the history and the frozen frame and is the error
//! boundary for the pipeline: capture or recognition failures are logged,
//! surfaced as a status message, and reset the session to `Idle`. Nothing
//! here is fatal to the process.

pub mod messages;

use image::RgbaImage;

use crate::capture::{self, CaptureBackend};
use crate::domain::{Rect, Selection};
use crate::error::SessionError;
use crate::history::{History, HistoryMode};
use crate::ocr::OcrEngine;
use messages::Msg;

/// Where the interaction currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the user to invoke capture.
    #[default]
    Idle,
    /// Capture invoked; the window is leaving the screen so it does not
    /// occlude the frame about to be frozen. The UI reports back with
    /// [`Msg::WindowHidden`] once the compositor has repainted.
    Hiding,
    /// A frame is frozen and the user is dragging a selection.
    Selecting,
    /// Release received, the pipeline is running. Transient: the
    /// controller returns to `Idle` before `update` returns.
    Captured,
}

/// User-visible outcome of the last operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    Info(String),
    Error(String),
}

pub struct Controller<C: CaptureBackend, O: OcrEngine> {
    backend: C,
    ocr: O,
    phase: Phase,
    selection: Selection,
    frame: Option<RgbaImage>,
    history: History,
    status: Status,
}

impl<C: CaptureBackend, O: OcrEngine> Controller<C, O> {
    pub fn new(backend: C, ocr: O, mode: HistoryMode) -> Self {
        Self {
            backend,
            ocr,
            phase: Phase::Idle,
            selection: Selection::default(),
            frame: None,
            history: History::new(mode),
            status: Status::Ready,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The frozen frame, present while selecting.
    pub fn frame(&self) -> Option<&RgbaImage> {
        self.frame.as_ref()
    }

    /// Rectangle of the in-progress drag, for outline redraws.
    pub fn selection_outline(&self) -> Option<Rect> {
        self.selection.outline()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Mutable history access for note editing in the table view.
    pub fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::CaptureRequested => {
                // The frame is not frozen yet: grabbing it now would
                // capture this tool's own window on top of the screen.
                if self.phase == Phase::Idle {
                    self.phase = Phase::Hiding;
                }
            }
            Msg::WindowHidden => self.freeze_frame(),
            Msg::SelectionPressed(point) => {
                if self.phase == Phase::Selecting {
                    self.selection.press(point);
                }
            }
            Msg::SelectionDragged(point) => {
                if self.phase == Phase::Selecting {
                    self.selection.drag(point);
                }
            }
            Msg::SelectionReleased(point) => {
                if self.phase != Phase::Selecting {
                    return;
                }
                let Some(rect) = self.selection.finish(point) else {
                    return;
                };
                self.phase = Phase::Captured;
                match self.recognize_region(rect) {
                    // Recognized-empty selections leave the history alone
                    // instead of replacing the table with nothing.
                    Ok(text) if text.trim().is_empty() => {
                        self.status =
                            Status::Info("nothing recognized in selection".to_string());
                    }
                    Ok(text) => {
                        self.history.ingest(&text);
                        self.status = Status::Info(format!(
                            "captured {}x{} region at {}",
                            rect.width,
                            rect.height,
                            chrono::Local::now().format("%H:%M:%S")
                        ));
                    }
                    Err(err) => {
                        log::error!("capture failed: {}", err);
                        self.status = Status::Error(err.to_string());
                    }
                }
                // Back to Idle on both paths; the user may re-invoke capture.
                self.reset_session();
            }
            Msg::SelectionCancelled => {
                if self.phase != Phase::Idle {
                    self.status = Status::Info("capture cancelled".to_string());
                    self.reset_session();
                }
            }
            Msg::HistoryModeSet(mode) => self.set_history_mode(mode),
            Msg::HistoryCleared => self.history.clear(),
            Msg::ExportRequested(path) => {
                match crate::export::write_history(&path, &self.history.render()) {
                    Ok(()) => {
                        self.status = Status::Info(format!("saved to {}", path.display()));
                    }
                    Err(err) => {
                        log::error!("export failed: {}", err);
                        self.status = Status::Error(err.to_string());
                    }
                }
            }
        }
    }

    fn freeze_frame(&mut self) {
        if self.phase != Phase::Hiding {
            return;
        }
        match self.backend.capture_frame() {
            Ok(frame) => {
                self.frame = Some(frame);
                self.selection.clear();
                self.phase = Phase::Selecting;
            }
            Err(err) => {
                log::error!("could not freeze a frame: {}", err);
                self.status = Status::Error(err.to_string());
                self.phase = Phase::Idle;
            }
        }
    }

    /// Crop the selection from the frozen frame and recognize it, entirely
    /// in memory. A zero-area or out-of-frame selection is recognized as
    /// empty text without invoking the OCR backend.
    fn recognize_region(&self, rect: Rect) -> Result<String, SessionError> {
        let Some(frame) = self.frame.as_ref() else {
            return Ok(String::new());
        };
        if rect.is_empty() {
            return Ok(String::new());
        }
        match capture::crop_region(frame, rect) {
            Some(region) => Ok(self.ocr.recognize(&region)?),
            None => Ok(String::new()),
        }
    }

    fn set_history_mode(&mut self, mode: HistoryMode) {
        if self.history.mode() != mode {
            log::info!("switching history mode to {:?}", mode);
            self.history = History::new(mode);
        }
    }

    fn reset_session(&mut self) {
        self.selection.clear();
        self.frame = None;
        self.phase = Phase::Idle;
    }
}
