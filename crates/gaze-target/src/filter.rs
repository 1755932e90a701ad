//! Confidence filtering and mask materialization.

use gaze_target_core::{rasterize_polygon, Mask};

use crate::detector::RawDetection;

/// A detection that survived filtering, with its outline rasterized into a
/// frame-sized mask.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Bounding box `[x1, y1, x2, y2]` in pixels, kept for diagnostics.
    pub bbox_xyxy: [f32; 4],
    pub class_idx: usize,
    pub confidence: f32,
    pub mask: Mask,
}

/// Filter raw detector output and materialize masks.
///
/// An entry is kept only when its confidence is *strictly* above
/// `confidence_threshold`. Entries without polygon data are skipped
/// silently — a box-only detection is expected output, not an error.
/// Detector order is preserved; no re-sorting happens here, and the
/// downstream hit test relies on that.
pub fn filter_detections(
    raw: &[RawDetection],
    confidence_threshold: f32,
    frame_width: usize,
    frame_height: usize,
) -> Vec<Detection> {
    let mut out = Vec::new();
    for entry in raw {
        if entry.confidence <= confidence_threshold {
            continue;
        }
        let Some(polygon) = &entry.polygon else {
            continue;
        };
        out.push(Detection {
            bbox_xyxy: entry.bbox_xyxy,
            class_idx: entry.class_idx,
            confidence: entry.confidence,
            mask: rasterize_polygon(polygon, frame_width, frame_height),
        });
    }
    out
}
