//! Result-image encoding boundary.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use gaze_target_core::RgbFrame;

use crate::error::PipelineError;

/// Encode a frame as a lossless PNG.
///
/// Encoder failures surface as [`PipelineError::Encoding`], distinct from
/// the "no target" family of outcomes.
pub fn encode_png(frame: &RgbFrame) -> Result<Vec<u8>, PipelineError> {
    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &frame.data,
        frame.width as u32,
        frame.height as u32,
        ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}
