//! Screen capture: frame grabbing and region cropping
//!
//! Capture is two-phase: the backend grabs one full frame when the user
//! enters selection mode, and the selected region is cropped from that
//! frozen frame on release. The cropped image is handed to OCR in memory,
//! no intermediate file is written.

pub mod xcap_backend;

use image::RgbaImage;

use crate::domain::Rect;
use crate::error::CaptureError;

/// Source of full-screen frames.
pub trait CaptureBackend {
    /// Grab the current contents of the screen as one RGBA frame.
    fn capture_frame(&self) -> Result<RgbaImage, CaptureError>;
}

/// Crop a selection rectangle out of a captured frame.
///
/// The rectangle is clamped to the frame bounds first; a rectangle that is
/// empty or lies entirely outside the frame yields `None`, which the
/// caller treats as "recognized empty text".
pub fn crop_region(frame: &RgbaImage, rect: Rect) -> Option<RgbaImage> {
    let clamped = rect.clamp_to(frame.width(), frame.height())?;
    log::debug!(
        "cropping {}x{} region at ({}, {}) from {}x{} frame",
        clamped.width,
        clamped.height,
        clamped.x,
        clamped.y,
        frame.width(),
        frame.height()
    );
    Some(
        image::imageops::crop_imm(
            frame,
            clamped.x as u32,
            clamped.y as u32,
            clamped.width,
            clamped.height,
        )
        .to_image(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn frame(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn crop_returns_the_selected_region() {
        let cropped = crop_region(&frame(100, 80), Rect::new(10, 20, 30, 40)).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (30, 40));
    }

    #[test]
    fn crop_clamps_selections_that_overhang_the_frame() {
        let cropped = crop_region(&frame(100, 80), Rect::new(90, 70, 50, 50)).unwrap();
        assert_eq!((cropped.width(), cropped.height()), (10, 10));
    }

    #[test]
    fn empty_or_out_of_bounds_selection_yields_none() {
        assert!(crop_region(&frame(100, 80), Rect::new(5, 5, 0, 0)).is_none());
        assert!(crop_region(&frame(100, 80), Rect::new(500, 500, 10, 10)).is_none());
    }
}
