//! Scanline rasterization of normalized-coordinate polygons.

use crate::mask::Mask;

/// Rasterize a polygon given in normalized `[x, y]` coordinates (each
/// component in `[0, 1]`) into a binary mask of `width`×`height` cells.
///
/// Each vertex is scaled by the target dimensions and truncated to an
/// integer pixel coordinate, then the polygon is filled with the even-odd
/// rule, sampling at pixel centers: a cell `(x, y)` is set when the point
/// `(x + 0.5, y + 0.5)` lies inside the scaled outline. The even-odd rule
/// is orientation-independent, so vertex winding does not matter.
///
/// Degenerate input (fewer than 3 vertices, or an outline enclosing no
/// pixel center, e.g. all vertices collinear) yields an all-zero mask.
pub fn rasterize_polygon(polygon: &[[f32; 2]], width: usize, height: usize) -> Mask {
    let mut mask = Mask::zeros(width, height);
    if polygon.len() < 3 {
        return mask;
    }

    // Integer-truncated vertex coordinates, as f64 for exact scanline math.
    let verts: Vec<(f64, f64)> = polygon
        .iter()
        .map(|p| {
            (
                (p[0] as f64 * width as f64).trunc(),
                (p[1] as f64 * height as f64).trunc(),
            )
        })
        .collect();

    let mut crossings: Vec<f64> = Vec::with_capacity(verts.len());
    for y in 0..height {
        let yc = y as f64 + 0.5;
        crossings.clear();

        for i in 0..verts.len() {
            let (x0, y0) = verts[i];
            let (x1, y1) = verts[(i + 1) % verts.len()];
            if y0 == y1 {
                continue; // horizontal edge, never crosses a pixel-center scanline
            }
            if (y0 <= yc) != (y1 <= yc) {
                let t = (yc - y0) / (y1 - y0);
                crossings.push(x0 + t * (x1 - x0));
            }
        }

        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        for span in crossings.chunks_exact(2) {
            // Cells whose center lies in [span_start, span_end).
            let start = (span[0] - 0.5).ceil().max(0.0) as usize;
            let end = ((span[1] - 0.5).ceil().max(0.0) as usize).min(width);
            for x in start..end {
                mask.set(x, y);
            }
        }
    }

    mask
}
