//! OCR (Optical Character Recognition) via rusty-tesseract

use std::collections::HashMap;

use image::RgbaImage;

use crate::config::AppConfig;
use crate::error::RecognitionError;

/// Text recognition backend.
pub trait OcrEngine {
    /// Recognize the text in an image, in memory.
    ///
    /// An image with no pixels short-circuits to empty text without
    /// touching the backend.
    fn recognize(&self, img: &RgbaImage) -> Result<String, RecognitionError>;
}

/// OCR engine backed by the system tesseract binary.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    /// Tesseract language code, e.g. "eng".
    lang: String,
    /// Page segmentation mode. 11 (sparse text) suits screen grabs.
    psm: i32,
    /// Whether to upscale small selections before recognition.
    upscale_small: bool,
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self {
            lang: "eng".to_string(),
            psm: 11,
            upscale_small: true,
        }
    }
}

impl TesseractEngine {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            lang: config.ocr_language.clone(),
            psm: config.ocr_psm,
            upscale_small: config.upscale_small,
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, img: &RgbaImage) -> Result<String, RecognitionError> {
        if img.width() == 0 || img.height() == 0 {
            return Ok(String::new());
        }

        log::info!(
            "running OCR with tesseract on {}x{} image",
            img.width(),
            img.height()
        );

        let dynamic_img = image::DynamicImage::ImageRgba8(img.clone());

        // Tesseract struggles with text under ~10 px tall, so small
        // selections are upscaled before recognition.
        let min_dimension = img.width().min(img.height());
        let processed_img = if self.upscale_small && min_dimension < 100 {
            log::debug!("upscaling small selection 4x");
            dynamic_img.resize(
                img.width() * 4,
                img.height() * 4,
                image::imageops::FilterType::Lanczos3,
            )
        } else if self.upscale_small && min_dimension < 200 {
            log::debug!("upscaling small selection 2x");
            dynamic_img.resize(
                img.width() * 2,
                img.height() * 2,
                image::imageops::FilterType::Lanczos3,
            )
        } else {
            dynamic_img
        };

        let tess_img = rusty_tesseract::Image::from_dynamic_image(&processed_img)
            .map_err(|e| RecognitionError::InvalidImage(e.to_string()))?;

        let dpi = if min_dimension < 200 { 300 } else { 150 };
        let args = rusty_tesseract::Args {
            lang: self.lang.clone(),
            config_variables: HashMap::new(),
            dpi: Some(dpi),
            psm: Some(self.psm),
            oem: Some(3),
        };

        rusty_tesseract::image_to_string(&tess_img, &args)
            .map_err(|e| RecognitionError::Backend(e.to_string()))
    }
}
