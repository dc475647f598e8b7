//! Sun and moon discs.

use horizon_core::Rgb;

use crate::canvas::Canvas;
use crate::celestial::BodyPosition;
use crate::chars::DISC_CHAR;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 2.0;

/// Draw a disc centred on a body, blending `color` into whatever background
/// each covered cell already has.
pub fn paint(
    canvas: &mut Canvas,
    body: &BodyPosition,
    radius_rows: f32,
    shift: f32,
    color: Rgb,
    alpha: f32,
) {
    if alpha <= 0.0 || canvas.width() == 0 {
        return;
    }

    let radius = radius_rows.max(0.5);
    let cx = body.left * canvas.width() as f32;
    let cy = body.top + shift;

    let y_min = (cy - radius).floor() as i32;
    let y_max = (cy + radius).ceil() as i32;
    let x_min = (cx - radius * CELL_ASPECT).floor() as i32;
    let x_max = (cx + radius * CELL_ASPECT).ceil() as i32;

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let dx = (x as f32 + 0.5 - cx) / CELL_ASPECT;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            if let Some(cell) = canvas.get(x, y) {
                let fg = cell.bg.lerp(color, alpha);
                canvas.set_glyph(x, y, DISC_CHAR, fg);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY: Rgb = Rgb::from_u32(0x87ceeb);
    const SUN: Rgb = Rgb::from_u32(0xf5d6a1);

    fn body(top: f32, left: f32) -> BodyPosition {
        BodyPosition {
            top,
            left,
            visible: true,
        }
    }

    #[test]
    fn test_disc_covers_center() {
        let mut canvas = Canvas::new(40, 20, SKY);
        paint(&mut canvas, &body(10.0, 0.5), 2.0, 0.0, SUN, 1.0);

        let center = canvas.get(20, 10).unwrap();
        assert_eq!(center.ch, DISC_CHAR);
        assert_eq!(center.fg, SUN);
        // Well outside the radius
        assert_eq!(canvas.get(20, 16).unwrap().ch, ' ');
        assert_eq!(canvas.get(30, 10).unwrap().ch, ' ');
    }

    #[test]
    fn test_disc_is_wider_than_tall() {
        let mut canvas = Canvas::new(40, 20, SKY);
        paint(&mut canvas, &body(10.0, 0.5), 2.0, 0.0, SUN, 1.0);

        let count_row = (0..40).filter(|&x| canvas.get(x, 10).unwrap().ch == DISC_CHAR).count();
        let count_col = (0..20).filter(|&y| canvas.get(20, y).unwrap().ch == DISC_CHAR).count();
        assert!(count_row > count_col);
    }

    #[test]
    fn test_alpha_blends_into_background() {
        let mut canvas = Canvas::new(40, 20, SKY);
        paint(&mut canvas, &body(10.0, 0.5), 2.0, 0.0, SUN, 0.5);
        assert_eq!(canvas.get(20, 10).unwrap().fg, SKY.lerp(SUN, 0.5));

        let mut hidden = Canvas::new(40, 20, SKY);
        paint(&mut hidden, &body(10.0, 0.5), 2.0, 0.0, SUN, 0.0);
        assert_eq!(hidden, Canvas::new(40, 20, SKY));
    }

    #[test]
    fn test_offscreen_disc() {
        let mut canvas = Canvas::new(40, 20, SKY);
        paint(&mut canvas, &body(60.0, 0.5), 2.0, 0.0, SUN, 1.0);
        assert_eq!(canvas, Canvas::new(40, 20, SKY));
    }
}
