//! Point-in-mask target resolution.

use crate::filter::Detection;
use crate::gaze::GazePoint;

/// Return the index of the first detection whose mask covers the gaze
/// pixel, or `None` when no mask does (or the sequence is empty).
///
/// When several masks overlap at the gaze pixel, the first in detector
/// order wins. That is a deliberate policy: the detector's ordering is the
/// tie-break, independent of confidence. Masks are indexed `[row][col]`,
/// i.e. `(gaze.y, gaze.x)`, the same orientation they were rasterized in.
pub fn resolve_target(gaze: GazePoint, detections: &[Detection]) -> Option<usize> {
    detections
        .iter()
        .position(|d| d.mask.contains(gaze.x, gaze.y))
}
