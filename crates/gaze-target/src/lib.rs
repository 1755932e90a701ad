//! Gaze-to-object target resolution for headset frames.
//!
//! Given a single RGB frame that embeds a red gaze-marker dot, plus the
//! output of an object-segmentation detector, this crate resolves which
//! object the wearer is looking at and produces an alpha-masked crop of it:
//!
//! - locate the marker dot by color and take its pixel centroid,
//! - rasterize each detection's normalized polygon into a frame-sized mask,
//! - hit-test the gaze pixel against the masks (first match wins),
//! - crop the target's tight bounding region and zero everything outside
//!   its mask.
//!
//! The segmentation model itself is a collaborator behind the
//! [`ObjectDetector`] trait; it is constructed once at startup and reused
//! across frames.
//!
//! ## Quickstart
//!
//! ```no_run
//! use gaze_target::{encode_png, GazePipeline, PipelineParams, ReplayDetector};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let detections = std::fs::read_to_string("detections.json")?;
//! let detector = ReplayDetector::from_json(&detections)?;
//! let pipeline = GazePipeline::new(Box::new(detector), PipelineParams::default());
//!
//! let raw = std::fs::read("frame.rgb")?; // 640*640*3 bytes, row-major RGB
//! let result = pipeline.process_raw(raw)?;
//! std::fs::write("target.png", encode_png(&result.image)?)?;
//! # Ok(())
//! # }
//! ```
//!
//! Every stage is a pure function over its inputs; the pipeline holds no
//! per-frame state, so independent frames may be processed concurrently as
//! long as the detector implementation tolerates it.

mod detector;
mod encode;
mod error;
mod filter;
mod gaze;
mod labels;
mod params;
mod pipeline;
mod resolve;

pub use detector::{DetectorError, ObjectDetector, RawDetection, ReplayDetector};
pub use encode::encode_png;
pub use error::PipelineError;
pub use filter::{filter_detections, Detection};
pub use gaze::{locate_gaze, GazePoint};
pub use labels::{label_name, COCO_LABELS};
pub use params::{MarkerColorBand, PipelineParams};
pub use pipeline::{GazePipeline, TargetCrop};
pub use resolve::resolve_target;

pub use gaze_target_core as core;
pub use gaze_target_core::{BoundingBox, Mask, RgbFrame, RgbFrameView};
