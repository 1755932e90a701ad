//! Binary per-pixel membership masks.

use serde::{Deserialize, Serialize};

/// Inclusive pixel bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }
}

/// Binary mask over a pixel grid, row-major, one byte per cell (0 or 1).
///
/// A mask is always built at the resolution of the frame it will be tested
/// or composited against; that equality is a caller precondition, not
/// something the operations below infer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Mask {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width * height],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize) {
        self.data[y * self.width + x] = 1;
    }

    /// Bounds-checked hit test: `false` for any coordinate outside the grid.
    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.get(x, y)
    }

    /// Number of set cells.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Inclusive bounding box of all set cells, or `None` for an empty mask.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut min_x = usize::MAX;
        let mut max_x = 0usize;
        let mut min_y = usize::MAX;
        let mut max_y = 0usize;
        let mut any = false;

        for y in 0..self.height {
            let row = &self.data[y * self.width..(y + 1) * self.width];
            for (x, &v) in row.iter().enumerate() {
                if v == 0 {
                    continue;
                }
                any = true;
                min_x = min_x.min(x);
                max_x = max_x.max(x);
                min_y = min_y.min(y);
                max_y = max_y.max(y);
            }
        }

        any.then_some(BoundingBox {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_empty_mask_is_none() {
        assert_eq!(Mask::zeros(8, 8).bounding_box(), None);
    }

    #[test]
    fn bounding_box_of_single_cell() {
        let mut mask = Mask::zeros(32, 32);
        mask.set(20, 10);
        let bbox = mask.bounding_box().unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 20,
                max_x: 20,
                min_y: 10,
                max_y: 10
            }
        );
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);
    }

    #[test]
    fn bounding_box_spans_scattered_cells() {
        let mut mask = Mask::zeros(16, 16);
        mask.set(3, 7);
        mask.set(12, 2);
        mask.set(5, 14);
        let bbox = mask.bounding_box().unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                min_x: 3,
                max_x: 12,
                min_y: 2,
                max_y: 14
            }
        );
    }

    #[test]
    fn contains_is_false_out_of_range() {
        let mut mask = Mask::zeros(4, 4);
        mask.set(3, 3);
        assert!(mask.contains(3, 3));
        assert!(!mask.contains(4, 3));
        assert!(!mask.contains(3, 4));
    }
}
