//! Pipeline error taxonomy.
//!
//! Every user-visible failure is a distinct variant so transports can map
//! each to its own signal; nothing is folded into a catch-all, and no
//! stage ever substitutes a default image for a missing upstream value.

use gaze_target_core::FrameShapeError;

use crate::detector::DetectorError;

/// Failures produced by [`GazePipeline`](crate::GazePipeline).
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// Input buffer does not match the configured frame geometry.
    /// Rejected before any stage runs.
    #[error("invalid frame buffer length (expected {expected} bytes, got {got})")]
    InputShape { expected: usize, got: usize },

    /// No pixel in the frame matched the marker color band. Recoverable;
    /// callers typically retry with the next frame.
    #[error("no gaze marker found in frame")]
    GazeNotFound,

    /// Nothing above the confidence threshold carried mask data.
    #[error("no detections above the confidence threshold with mask data")]
    NoDetections,

    /// The gaze pixel is outside every candidate mask.
    #[error("gaze pixel ({x}, {y}) is not inside any detection mask")]
    NoTarget { x: usize, y: usize },

    /// A resolved target's mask has no set cells. The resolver only picks
    /// masks that cover the gaze pixel, so reaching this means the
    /// filter/resolver coupling is broken — an internal fault, not a
    /// recoverable per-frame condition.
    #[error("selected target mask has no set cells")]
    EmptyTargetMask,

    /// The detector collaborator failed.
    #[error("object detector failed")]
    Detector(#[source] DetectorError),

    /// The result image could not be serialized.
    #[error("failed to encode result image")]
    Encoding(#[from] image::ImageError),
}

impl From<FrameShapeError> for PipelineError {
    fn from(err: FrameShapeError) -> Self {
        Self::InputShape {
            expected: err.expected,
            got: err.got,
        }
    }
}
