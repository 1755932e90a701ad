//! Object-segmentation collaborator interface.

use serde::{Deserialize, Serialize};

use gaze_target_core::RgbFrameView;

/// Errors surfaced by detector implementations.
pub type DetectorError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// One raw entry from the segmentation detector.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawDetection {
    /// Bounding box `[x1, y1, x2, y2]` in pixels, `x1 <= x2`, `y1 <= y2`.
    pub bbox_xyxy: [f32; 4],
    /// Index into the fixed label table.
    pub class_idx: usize,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f32,
    /// Object outline in normalized `[0, 1]` coordinates. Absent for
    /// box-only detections, which the pipeline silently skips.
    #[serde(default)]
    pub polygon: Option<Vec<[f32; 2]>>,
}

/// The external object-segmentation model.
///
/// Implementations are constructed once at startup and reused across
/// frames; the pipeline never mutates them per request. Nothing here
/// assumes the detector can be invoked reentrantly — callers that fan
/// frames out across threads must confirm that with the implementation.
pub trait ObjectDetector {
    /// Run the model on one frame and return its raw detections.
    fn detect(&self, frame: &RgbFrameView<'_>) -> Result<Vec<RawDetection>, DetectorError>;
}

/// Detector that replays a fixed detection list for every frame.
///
/// Used by the demo binary and tests to exercise the pipeline without a
/// segmentation model in the loop.
#[derive(Clone, Debug, Default)]
pub struct ReplayDetector {
    detections: Vec<RawDetection>,
}

impl ReplayDetector {
    pub fn new(detections: Vec<RawDetection>) -> Self {
        Self { detections }
    }

    /// Load the replayed detections from a JSON array of [`RawDetection`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl ObjectDetector for ReplayDetector {
    fn detect(&self, _frame: &RgbFrameView<'_>) -> Result<Vec<RawDetection>, DetectorError> {
        Ok(self.detections.clone())
    }
}
