//! Owned and borrowed RGB frame types.
//!
//! Frames are interleaved RGB, row-major, 8 bits per channel. Row 0 is the
//! top of the image; callers that receive bottom-up capture buffers must
//! normalize orientation once, before any stage looks at the pixels.

pub const RGB_CHANNELS: usize = 3;

/// Buffer length does not match the declared frame geometry.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid RGB frame buffer length (expected {expected} bytes, got {got})")]
pub struct FrameShapeError {
    pub expected: usize,
    pub got: usize,
}

/// Borrowed view over an RGB frame.
#[derive(Clone, Copy, Debug)]
pub struct RgbFrameView<'a> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [u8], // row-major RGB, len = w*h*3
}

impl<'a> RgbFrameView<'a> {
    /// Channels of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let base = (y * self.width + x) * RGB_CHANNELS;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }
}

/// Owned RGB frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// Take ownership of a raw row-major RGB buffer, checking its length
    /// against the declared geometry. Rejecting a malformed buffer here
    /// keeps every later stage free of shape checks.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self, FrameShapeError> {
        let expected = width * height * RGB_CHANNELS;
        if data.len() != expected {
            return Err(FrameShapeError {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// All-black frame of the given geometry.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height * RGB_CHANNELS],
        }
    }

    #[inline]
    pub fn view(&self) -> RgbFrameView<'_> {
        RgbFrameView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        self.view().pixel(x, y)
    }

    /// Write the channels of the pixel at `(x, y)`.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; 3]) {
        let base = (y * self.width + x) * RGB_CHANNELS;
        self.data[base..base + RGB_CHANNELS].copy_from_slice(&rgb);
    }

    /// Reverse the row order in place.
    ///
    /// Capture sources that hand out bottom-up buffers (e.g. GPU readback)
    /// are normalized with exactly one call to this, before the frame is
    /// shared between stages.
    pub fn flip_vertical(&mut self) {
        let stride = self.width * RGB_CHANNELS;
        let mut top = 0usize;
        let mut bottom = self.height.saturating_sub(1);
        while top < bottom {
            let (head, tail) = self.data.split_at_mut(bottom * stride);
            head[top * stride..top * stride + stride].swap_with_slice(&mut tail[..stride]);
            top += 1;
            bottom -= 1;
        }
    }
}
