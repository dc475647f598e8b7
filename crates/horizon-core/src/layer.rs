//! Mountain depth layers.

/// One of the three mountain silhouettes, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountainLayer {
    Far,
    Middle,
    Close,
}

impl MountainLayer {
    /// All layers in painting order (back to front).
    pub const ALL: [MountainLayer; 3] = [
        MountainLayer::Far,
        MountainLayer::Middle,
        MountainLayer::Close,
    ];

    /// Height of the layer as a fraction of the viewport height.
    pub fn height_frac(&self) -> f32 {
        match self {
            MountainLayer::Far => 0.60,
            MountainLayer::Middle => 0.50,
            MountainLayer::Close => 0.40,
        }
    }

    /// Parallax factor: rows moved per row scrolled.
    pub fn scroll_factor(&self) -> f32 {
        match self {
            MountainLayer::Far => 0.1,
            MountainLayer::Middle => 0.2,
            MountainLayer::Close => 0.3,
        }
    }

    /// Default number of trees placed on the layer.
    pub fn default_tree_density(&self) -> usize {
        match self {
            MountainLayer::Far => 30,
            MountainLayer::Middle => 40,
            MountainLayer::Close => 50,
        }
    }

    /// Ridge polyline as `(x%, y%)` points, y measured down from the layer top.
    pub fn ridge(&self) -> &'static [(f32, f32)] {
        match self {
            MountainLayer::Far => &[
                (0.0, 15.0),
                (15.0, 20.0),
                (30.0, 25.0),
                (50.0, 15.0),
                (70.0, 25.0),
                (85.0, 20.0),
                (100.0, 30.0),
            ],
            MountainLayer::Middle => &[
                (0.0, 35.0),
                (20.0, 40.0),
                (40.0, 30.0),
                (60.0, 40.0),
                (80.0, 35.0),
                (100.0, 45.0),
            ],
            MountainLayer::Close => &[
                (0.0, 40.0),
                (15.0, 50.0),
                (30.0, 45.0),
                (45.0, 50.0),
                (60.0, 40.0),
                (75.0, 50.0),
                (90.0, 45.0),
                (100.0, 55.0),
            ],
        }
    }

    /// Get the display name.
    pub fn name(&self) -> &'static str {
        match self {
            MountainLayer::Far => "far",
            MountainLayer::Middle => "middle",
            MountainLayer::Close => "close",
        }
    }
}
