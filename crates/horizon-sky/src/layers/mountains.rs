//! Mountain silhouettes.

use horizon_core::{MountainLayer, Rgb};

use crate::canvas::Canvas;
use crate::chars::RIDGE_CHAR;

/// Ridge depth below the layer top, in percent of the layer height, at a
/// horizontal position in percent of the viewport width.
pub fn ridge_percent(layer: MountainLayer, x_pct: f32) -> f32 {
    let points = layer.ridge();
    let x_pct = x_pct.clamp(0.0, 100.0);

    for pair in points.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x_pct <= x1 {
            let t = if x1 > x0 { (x_pct - x0) / (x1 - x0) } else { 0.0 };
            return y0 + (y1 - y0) * t;
        }
    }

    points.last().map(|&(_, y)| y).unwrap_or(0.0)
}

/// Top edge of the layer's box in rows.
pub fn layer_top(layer: MountainLayer, height: f32, shift: f32) -> f32 {
    height * (1.0 - layer.height_frac()) + shift
}

/// Ridge row at a horizontal fraction of the viewport width.
pub fn ridge_row(layer: MountainLayer, x_frac: f32, height: f32, shift: f32) -> f32 {
    let layer_height = layer.height_frac() * height;
    layer_top(layer, height, shift) + ridge_percent(layer, x_frac * 100.0) / 100.0 * layer_height
}

/// Fill the layer's silhouette.
///
/// Cells mostly below the ridge are filled; cells straddling it get a
/// lower half block.
pub fn paint(canvas: &mut Canvas, layer: MountainLayer, color: Rgb, shift: f32) {
    let width = canvas.width();
    let height = canvas.height() as f32;
    if width == 0 {
        return;
    }

    for x in 0..width {
        let x_frac = (x as f32 + 0.5) / width as f32;
        let ridge = ridge_row(layer, x_frac, height, shift);

        for y in 0..canvas.height() {
            let coverage = (y as f32 + 1.0 - ridge).clamp(0.0, 1.0);
            if coverage >= 0.75 {
                canvas.fill(x as i32, y as i32, color);
            } else if coverage >= 0.25 {
                canvas.set_glyph(x as i32, y as i32, RIDGE_CHAR, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ridge_hits_points() {
        for layer in MountainLayer::ALL {
            for &(x, y) in layer.ridge() {
                assert!((ridge_percent(layer, x) - y).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_ridge_interpolates() {
        // Far layer: (30, 25) -> (50, 15)
        assert!((ridge_percent(MountainLayer::Far, 40.0) - 20.0).abs() < 1e-5);
        // Clamped outside the viewport
        assert_eq!(ridge_percent(MountainLayer::Far, -10.0), 15.0);
        assert_eq!(ridge_percent(MountainLayer::Far, 150.0), 30.0);
    }

    #[test]
    fn test_ridge_row() {
        // Close layer is 40% of a 100-row viewport, starting at row 60
        assert_eq!(layer_top(MountainLayer::Close, 100.0, 0.0), 60.0);
        assert!((ridge_row(MountainLayer::Close, 0.0, 100.0, 0.0) - 76.0).abs() < 1e-4);
        assert!((ridge_row(MountainLayer::Close, 0.0, 100.0, 3.0) - 79.0).abs() < 1e-4);
    }

    #[test]
    fn test_paint_fills_below_ridge() {
        let sky = Rgb::new(0, 0, 0);
        let rock = Rgb::new(200, 100, 50);
        let mut canvas = Canvas::new(20, 50, sky);
        paint(&mut canvas, MountainLayer::Far, rock, 0.0);

        for x in 0..20 {
            assert_eq!(canvas.get(x, 0).unwrap().bg, sky);
            assert_eq!(canvas.get(x, 49).unwrap().bg, rock);
        }
    }
}
