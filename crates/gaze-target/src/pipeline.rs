//! Pipeline orchestration: raw frame in, masked target crop out.

use log::{debug, error, info};

use gaze_target_core::{apply_mask, crop_frame, crop_mask, BoundingBox, RgbFrame};

use crate::detector::ObjectDetector;
use crate::error::PipelineError;
use crate::filter::filter_detections;
use crate::gaze::{locate_gaze, GazePoint};
use crate::labels::label_name;
use crate::params::PipelineParams;
use crate::resolve::resolve_target;

/// Masked crop of the gazed-at object, plus diagnostics about how it was
/// resolved.
#[derive(Clone, Debug)]
pub struct TargetCrop {
    /// Cropped region of the frame with non-target pixels zeroed.
    pub image: RgbFrame,
    /// Gaze pixel the target was resolved against.
    pub gaze: GazePoint,
    /// Index of the target in the filtered detection sequence.
    pub target_index: usize,
    /// Class index of the target detection.
    pub class_idx: usize,
    /// Confidence of the target detection.
    pub confidence: f32,
    /// Region of the original frame the crop spans (inclusive bounds).
    pub region: BoundingBox,
}

/// Gaze-target resolution pipeline.
///
/// Holds the detector collaborator (constructed once, reused across
/// frames) and the pipeline configuration. The pipeline itself keeps no
/// per-frame state and performs no I/O; each [`process_raw`] call runs to
/// completion synchronously.
///
/// [`process_raw`]: GazePipeline::process_raw
pub struct GazePipeline {
    detector: Box<dyn ObjectDetector>,
    params: PipelineParams,
}

impl GazePipeline {
    pub fn new(detector: Box<dyn ObjectDetector>, params: PipelineParams) -> Self {
        Self { detector, params }
    }

    #[inline]
    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Run the pipeline on a raw row-major RGB buffer.
    ///
    /// The buffer must be exactly `frame_width * frame_height * 3` bytes;
    /// anything else is rejected as [`PipelineError::InputShape`] before
    /// any stage runs. Bottom-up buffers are flipped once here, so the
    /// gaze locator and the detector see the identical pixel orientation.
    pub fn process_raw(&self, data: Vec<u8>) -> Result<TargetCrop, PipelineError> {
        let mut frame =
            RgbFrame::from_raw(self.params.frame_width, self.params.frame_height, data)?;
        if self.params.bottom_up_frames {
            frame.flip_vertical();
        }
        self.process_frame(&frame)
    }

    /// Run the pipeline on an already-normalized frame.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, frame), fields(width = frame.width, height = frame.height))
    )]
    pub fn process_frame(&self, frame: &RgbFrame) -> Result<TargetCrop, PipelineError> {
        let view = frame.view();

        let gaze =
            locate_gaze(&view, &self.params.marker_band).ok_or(PipelineError::GazeNotFound)?;
        debug!("gaze pixel at ({}, {})", gaze.x, gaze.y);

        let raw = self
            .detector
            .detect(&view)
            .map_err(PipelineError::Detector)?;
        let detections = filter_detections(
            &raw,
            self.params.confidence_threshold,
            frame.width,
            frame.height,
        );
        debug!(
            "{} of {} raw detections kept after filtering",
            detections.len(),
            raw.len()
        );
        if detections.is_empty() {
            return Err(PipelineError::NoDetections);
        }

        let target_index = resolve_target(gaze, &detections)
            .ok_or(PipelineError::NoTarget { x: gaze.x, y: gaze.y })?;
        let target = &detections[target_index];
        info!(
            "target: {} (index {}, confidence {:.2})",
            label_name(target.class_idx).unwrap_or("unknown"),
            target_index,
            target.confidence
        );

        // The resolver only returns masks that cover the gaze pixel, so an
        // empty mask here means the filter/resolver coupling is broken.
        let region = target.mask.bounding_box().ok_or_else(|| {
            error!(
                "target mask at index {target_index} has no set cells despite covering the gaze pixel"
            );
            PipelineError::EmptyTargetMask
        })?;

        let crop = crop_frame(&view, region);
        let mask_crop = crop_mask(&target.mask, region);
        let image = apply_mask(&crop.view(), &mask_crop);

        Ok(TargetCrop {
            image,
            gaze,
            target_index,
            class_idx: target.class_idx,
            confidence: target.confidence,
            region,
        })
    }
}
