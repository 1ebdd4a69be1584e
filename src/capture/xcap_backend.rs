//! Frame capture via the xcap crate.
//!
//! Works on X11, Wayland (via portal) and Windows. Multiple monitors are
//! composited side by side into one frame so selection coordinates stay in
//! a single space.

use image::{ImageBuffer, Rgba, RgbaImage};
use xcap::Monitor;

use super::CaptureBackend;
use crate::error::CaptureError;

/// Capture backend backed by `xcap::Monitor`.
#[derive(Debug)]
pub struct XcapBackend;

impl XcapBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CaptureBackend for XcapBackend {
    fn capture_frame(&self) -> Result<RgbaImage, CaptureError> {
        let monitors = Monitor::all().map_err(|e| CaptureError::Backend(e.to_string()))?;
        if monitors.is_empty() {
            return Err(CaptureError::NoMonitors);
        }

        let mut total_width: u32 = 0;
        let mut max_height: u32 = 0;
        for monitor in &monitors {
            total_width += monitor.width().map_err(|e| CaptureError::Backend(e.to_string()))?;
            let height = monitor
                .height()
                .map_err(|e| CaptureError::Backend(e.to_string()))?;
            max_height = max_height.max(height);
        }

        let mut composite =
            ImageBuffer::from_pixel(total_width, max_height, Rgba([0, 0, 0, 255]));

        let mut x_offset: u32 = 0;
        for monitor in monitors {
            let shot = monitor
                .capture_image()
                .map_err(|e| CaptureError::Backend(e.to_string()))?;
            image::imageops::overlay(&mut composite, &shot, x_offset as i64, 0);
            x_offset += shot.width();
        }

        log::info!("captured {}x{} frame", composite.width(), composite.height());
        Ok(composite)
    }
}
