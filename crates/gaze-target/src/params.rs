//! Pipeline configuration.

use serde::{Deserialize, Serialize};

/// Inclusive RGB color band of the gaze-marker dot.
///
/// A pixel matches when `r >= red_min && g <= green_max && b <= blue_max`.
/// The defaults describe the saturated red marker the headset overlays;
/// they are tunables, not derived values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerColorBand {
    pub red_min: u8,
    pub green_max: u8,
    pub blue_max: u8,
}

impl Default for MarkerColorBand {
    fn default() -> Self {
        Self {
            red_min: 215,
            green_max: 40,
            blue_max: 40,
        }
    }
}

impl MarkerColorBand {
    #[inline]
    pub fn matches(&self, [r, g, b]: [u8; 3]) -> bool {
        r >= self.red_min && g <= self.green_max && b <= self.blue_max
    }
}

/// Configuration for [`GazePipeline`](crate::GazePipeline).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Expected frame width in pixels.
    pub frame_width: usize,
    /// Expected frame height in pixels.
    pub frame_height: usize,
    /// Raw buffers arrive bottom-up (GPU readback row order) and get one
    /// vertical flip on ingest, before any stage sees the pixels. Set to
    /// `false` for sources that already deliver top-down rows.
    #[serde(default = "default_bottom_up")]
    pub bottom_up_frames: bool,
    /// Detections are kept only when confidence is strictly above this.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    /// Color band of the gaze-marker dot.
    #[serde(default)]
    pub marker_band: MarkerColorBand,
}

fn default_bottom_up() -> bool {
    true
}

fn default_confidence_threshold() -> f32 {
    0.15
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            frame_width: 640,
            frame_height: 640,
            bottom_up_frames: default_bottom_up(),
            confidence_threshold: default_confidence_threshold(),
            marker_band: MarkerColorBand::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive() {
        let band = MarkerColorBand::default();
        assert!(band.matches([215, 40, 40]));
        assert!(band.matches([255, 0, 0]));
        assert!(!band.matches([214, 0, 0]));
        assert!(!band.matches([255, 41, 0]));
        assert!(!band.matches([255, 0, 41]));
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: PipelineParams =
            serde_json::from_str(r#"{"frame_width": 640, "frame_height": 640}"#).unwrap();
        assert!(params.bottom_up_frames);
        assert_eq!(params.confidence_threshold, 0.15);
        assert_eq!(params.marker_band, MarkerColorBand::default());
    }
}
