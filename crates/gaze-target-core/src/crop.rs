//! Region extraction and mask compositing.

use crate::image::{RgbFrame, RgbFrameView, RGB_CHANNELS};
use crate::mask::{BoundingBox, Mask};

/// Copy the frame pixels spanned by `bbox` (both bounds inclusive) into a
/// new frame of `bbox.width()`×`bbox.height()` pixels.
pub fn crop_frame(frame: &RgbFrameView<'_>, bbox: BoundingBox) -> RgbFrame {
    assert!(
        bbox.max_x < frame.width && bbox.max_y < frame.height,
        "bounding box {bbox:?} exceeds frame {}x{}",
        frame.width,
        frame.height
    );

    let out_w = bbox.width();
    let out_h = bbox.height();
    let mut data = Vec::with_capacity(out_w * out_h * RGB_CHANNELS);
    for y in bbox.min_y..=bbox.max_y {
        let start = (y * frame.width + bbox.min_x) * RGB_CHANNELS;
        let end = (y * frame.width + bbox.max_x + 1) * RGB_CHANNELS;
        data.extend_from_slice(&frame.data[start..end]);
    }

    RgbFrame {
        width: out_w,
        height: out_h,
        data,
    }
}

/// Copy the mask cells spanned by `bbox` (both bounds inclusive) into a new
/// mask. Cropping a detection mask with the same box used for its frame
/// crop keeps the two grids aligned for compositing.
pub fn crop_mask(mask: &Mask, bbox: BoundingBox) -> Mask {
    assert!(
        bbox.max_x < mask.width && bbox.max_y < mask.height,
        "bounding box {bbox:?} exceeds mask {}x{}",
        mask.width,
        mask.height
    );

    let out_w = bbox.width();
    let out_h = bbox.height();
    let mut data = Vec::with_capacity(out_w * out_h);
    for y in bbox.min_y..=bbox.max_y {
        let start = y * mask.width + bbox.min_x;
        data.extend_from_slice(&mask.data[start..start + out_w]);
    }

    Mask {
        width: out_w,
        height: out_h,
        data,
    }
}

/// Per-pixel channel-broadcast AND of a crop with its mask: pixels whose
/// mask cell is set are kept unchanged, all channels of the rest are forced
/// to zero. Panics if the grids differ in size (caller precondition).
pub fn apply_mask(crop: &RgbFrameView<'_>, mask: &Mask) -> RgbFrame {
    assert_eq!(
        (crop.width, crop.height),
        (mask.width, mask.height),
        "mask and crop dimensions must match"
    );

    let mut data = Vec::with_capacity(crop.data.len());
    for (pixel, &cell) in crop.data.chunks_exact(RGB_CHANNELS).zip(mask.data.iter()) {
        if cell != 0 {
            data.extend_from_slice(pixel);
        } else {
            data.extend_from_slice(&[0u8; RGB_CHANNELS]);
        }
    }

    RgbFrame {
        width: crop.width,
        height: crop.height,
        data,
    }
}
