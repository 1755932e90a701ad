//! Pixel-level primitives for gaze-target resolution.
//!
//! This crate is intentionally small and purely pixel-based. It knows
//! nothing about detectors, gaze semantics, or transports: just RGB
//! frames, binary masks, polygon rasterization, cropping and
//! mask compositing.

mod crop;
mod image;
mod logger;
mod mask;
mod raster;

pub use crop::{apply_mask, crop_frame, crop_mask};
pub use image::{FrameShapeError, RgbFrame, RgbFrameView, RGB_CHANNELS};
pub use mask::{BoundingBox, Mask};
pub use raster::rasterize_polygon;

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
