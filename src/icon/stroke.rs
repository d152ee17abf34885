// Thick straight-line rasterizer

use image::{Rgb, RgbImage};

use super::LineSpec;

/// Stroke a straight segment onto the canvas.
///
/// A pixel is painted when its centre projects onto the segment and lies
/// within `width / 2` of it. Ends are square and not extended past the
/// endpoints. Pixels outside the canvas are clipped.
pub fn stroke_line(canvas: &mut RgbImage, line: &LineSpec) {
    if line.width == 0 {
        return;
    }

    let (x0, y0) = (line.from.0 as f64, line.from.1 as f64);
    let (x1, y1) = (line.to.0 as f64, line.to.1 as f64);
    let half = line.width as f64 / 2.0;

    // Bounding box of the stroke, clipped to the canvas
    let min_x = (x0.min(x1) - half).floor().max(0.0) as i64;
    let min_y = (y0.min(y1) - half).floor().max(0.0) as i64;
    let max_x = ((x0.max(x1) + half).ceil() as i64).min(canvas.width() as i64 - 1);
    let max_y = ((y0.max(y1) + half).ceil() as i64).min(canvas.height() as i64 - 1);

    let (dx, dy) = (x1 - x0, y1 - y0);
    let len_sq = dx * dx + dy * dy;
    let color = Rgb(line.color);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (px, py) = (x as f64, y as f64);
            let covered = if len_sq == 0.0 {
                // Degenerate segment: a dot
                ((px - x0).powi(2) + (py - y0).powi(2)).sqrt() <= half
            } else {
                let t = ((px - x0) * dx + (py - y0) * dy) / len_sq;
                if !(0.0..=1.0).contains(&t) {
                    false
                } else {
                    let distance = ((px - x0) * dy - (py - y0) * dx).abs() / len_sq.sqrt();
                    distance <= half
                }
            };
            if covered {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
