//! Gaze-marker location by color.

use serde::{Deserialize, Serialize};

use gaze_target_core::RgbFrameView;

use crate::params::MarkerColorBand;

/// Pixel the wearer is looking at, in frame coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazePoint {
    pub x: usize,
    pub y: usize,
}

/// Locate the gaze-marker dot in a frame.
///
/// Scans for pixels inside the marker color band and returns the rounded
/// centroid of their coordinates, clamped into
/// `[0, width-1] x [0, height-1]`. Returns `None` when no pixel matches;
/// callers must treat that as a distinct condition rather than substitute
/// a default point. The frame is never mutated.
pub fn locate_gaze(frame: &RgbFrameView<'_>, band: &MarkerColorBand) -> Option<GazePoint> {
    let mut sum_x = 0u64;
    let mut sum_y = 0u64;
    let mut count = 0u64;

    for (i, pixel) in frame.data.chunks_exact(3).enumerate() {
        if band.matches([pixel[0], pixel[1], pixel[2]]) {
            sum_x += (i % frame.width) as u64;
            sum_y += (i / frame.width) as u64;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let mean_x = (sum_x as f64 / count as f64).round() as usize;
    let mean_y = (sum_y as f64 / count as f64).round() as usize;
    Some(GazePoint {
        x: mean_x.min(frame.width - 1),
        y: mean_y.min(frame.height - 1),
    })
}
