//! Character constants for the sky scene.

/// Star glyphs by size category.
pub const STAR_CHARS: [char; 3] = ['·', '+', '✦'];

/// Tree glyphs by size category.
pub const TREE_CHARS: [char; 2] = ['▴', '▲'];

/// Fill for the sun and moon discs.
pub const DISC_CHAR: char = '█';

/// Half-covered ridge cell.
pub const RIDGE_CHAR: char = '▄';
