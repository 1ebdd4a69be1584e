//! Error taxonomy for the capture pipeline.
//!
//! Formatting has no error type: the text formatter degrades malformed OCR
//! output to opaque single-cell rows instead of failing.

use std::fmt;

/// Screen capture failures.
#[derive(Debug)]
pub enum CaptureError {
    /// The capture backend could not enumerate any monitors.
    NoMonitors,
    /// The capture backend itself failed (permissions, platform API).
    Backend(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::NoMonitors => write!(f, "no monitors detected"),
            CaptureError::Backend(msg) => write!(f, "capture backend error: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}

/// OCR backend failures.
#[derive(Debug)]
pub enum RecognitionError {
    /// The image could not be handed to the OCR backend.
    InvalidImage(String),
    /// The OCR backend failed while recognizing.
    Backend(String),
}

impl fmt::Display for RecognitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionError::InvalidImage(msg) => write!(f, "invalid OCR input image: {}", msg),
            RecognitionError::Backend(msg) => write!(f, "OCR backend error: {}", msg),
        }
    }
}

impl std::error::Error for RecognitionError {}

/// History export failures.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "export failed: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

/// Any failure that can abort a capture session.
#[derive(Debug)]
pub enum SessionError {
    Capture(CaptureError),
    Recognition(RecognitionError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Capture(e) => write!(f, "{}", e),
            SessionError::Recognition(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Capture(e) => Some(e),
            SessionError::Recognition(e) => Some(e),
        }
    }
}

impl From<CaptureError> for SessionError {
    fn from(err: CaptureError) -> Self {
        SessionError::Capture(err)
    }
}

impl From<RecognitionError> for SessionError {
    fn from(err: RecognitionError) -> Self {
        SessionError::Recognition(err)
    }
}
