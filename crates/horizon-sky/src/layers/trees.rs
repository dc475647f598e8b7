//! Trees scattered over a mountain layer.

use horizon_core::{MountainLayer, Rgb};

use super::mountains;
use crate::canvas::Canvas;
use crate::chars::TREE_CHARS;
use crate::rng::RandomSource;

/// A tree on one mountain layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tree {
    /// Horizontal position as a fraction of the viewport width.
    pub x: f32,
    /// Height above the layer's bottom edge, as a fraction of the layer
    /// height.
    pub height_frac: f32,
    /// Size category (0 = small, 1 = large).
    pub size: u8,
}

/// Scatter `density` trees over a layer.
///
/// Each tree sits between 60% and 90% of the layer's viewport share above
/// the layer's bottom edge, which keeps it below the ridge.
pub fn generate(layer: MountainLayer, density: usize, rng: &mut impl RandomSource) -> Vec<Tree> {
    (0..density)
        .map(|_| {
            let x = rng.next_f32();
            let height_frac = rng.range(0.6, 0.9) * layer.height_frac();
            // Width between 4 and 12 px in the page layout
            let size = u8::from(rng.range(4.0, 12.0) >= 8.0);
            Tree {
                x,
                height_frac,
                size,
            }
        })
        .collect()
}

/// Cell a tree occupies, or `None` when it falls outside the mountain body.
pub fn cell(
    tree: &Tree,
    layer: MountainLayer,
    width: u16,
    height: u16,
    shift: f32,
) -> Option<(i32, i32)> {
    let h = height as f32;
    let bottom = h + shift;
    let row = bottom - tree.height_frac * layer.height_frac() * h;
    let ridge = mountains::ridge_row(layer, tree.x, h, shift);
    if row < ridge {
        return None;
    }

    let col = ((tree.x * width as f32) as i32).min(width as i32 - 1);
    Some((col, row.floor() as i32))
}

/// Draw a layer's trees.
pub fn paint(
    canvas: &mut Canvas,
    trees: &[Tree],
    layer: MountainLayer,
    color: Rgb,
    shift: f32,
) {
    for tree in trees {
        if let Some((x, y)) = cell(tree, layer, canvas.width(), canvas.height(), shift) {
            let ch = TREE_CHARS[(tree.size as usize).min(TREE_CHARS.len() - 1)];
            canvas.set_glyph(x, y, ch, color);
        }
    }
}
