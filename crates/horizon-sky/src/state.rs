//! Scene state: decoration plus the per-frame paint pass.

use horizon_core::{MountainLayer, ScenePalettes};
use ratatui::{Frame, widgets::Paragraph};

use crate::canvas::Canvas;
use crate::celestial;
use crate::layers::{bodies, mountains, stars, trees};
use crate::parallax::Parallax;
use crate::rng::Lcg;
use crate::snapshot::SkySnapshot;

/// Default number of stars.
pub const DEFAULT_STAR_COUNT: usize = 100;

/// Decoration for the scene and the logic to paint a snapshot.
#[derive(Debug)]
pub struct SceneState {
    /// Star field, in viewport fractions.
    stars: Vec<stars::Star>,
    /// Trees per layer, back to front.
    trees: [Vec<trees::Tree>; 3],
    /// Number of stars to generate.
    star_count: usize,
    /// Trees to generate per layer, back to front.
    tree_density: [usize; 3],
    /// Seed the decoration was generated from.
    seed: u64,
}

impl SceneState {
    /// Create a scene and generate its decoration from `seed`.
    pub fn new(seed: u64, star_count: usize, tree_density: [usize; 3]) -> Self {
        let mut scene = Self {
            stars: Vec::new(),
            trees: Default::default(),
            star_count,
            tree_density,
            seed,
        };
        scene.reseed(seed);
        scene
    }

    /// Seed captured from the system time.
    pub fn seed_from_time() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Regenerate stars and trees from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        let mut rng = Lcg::new(seed);
        self.stars = stars::generate(self.star_count, &mut rng);
        for (i, layer) in MountainLayer::ALL.into_iter().enumerate() {
            self.trees[i] = trees::generate(layer, self.tree_density[i], &mut rng);
        }
        self.seed = seed;
        log::debug!(
            "scene seeded with {seed}: {} stars, {:?} trees",
            self.stars.len(),
            self.tree_density
        );
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn stars(&self) -> &[stars::Star] {
        &self.stars
    }

    /// Trees on a layer.
    pub fn trees(&self, layer: MountainLayer) -> &[trees::Tree] {
        &self.trees[layer_index(layer)]
    }

    /// Paint a snapshot onto an off-screen canvas.
    pub fn paint(
        &self,
        width: u16,
        height: u16,
        snapshot: &SkySnapshot,
        parallax: &Parallax,
        palettes: &ScenePalettes,
        elapsed_ms: u64,
    ) -> Canvas {
        let mut canvas = Canvas::new(width, height, snapshot.sky_color);

        if snapshot.is_night {
            stars::paint(
                &mut canvas,
                &self.stars,
                snapshot.sky_color,
                palettes.star,
                parallax.star_alpha(),
                elapsed_ms,
            );
        }

        let disc_radius = celestial::disc_radius(snapshot.arc_center_y);
        let body_alpha = parallax.body_alpha();
        bodies::paint(
            &mut canvas,
            &snapshot.moon,
            disc_radius,
            parallax.body_shift(),
            palettes.moon,
            body_alpha,
        );
        bodies::paint(
            &mut canvas,
            &snapshot.sun,
            disc_radius,
            parallax.body_shift(),
            palettes.sun,
            body_alpha,
        );

        for layer in MountainLayer::ALL {
            let shift = parallax.layer_shift(layer);
            mountains::paint(&mut canvas, layer, snapshot.mountain_color(layer), shift);
            trees::paint(
                &mut canvas,
                self.trees(layer),
                layer,
                snapshot.tree_color,
                shift,
            );
        }

        canvas
    }

    /// Render a snapshot over the whole frame.
    pub fn render(
        &self,
        frame: &mut Frame,
        snapshot: &SkySnapshot,
        parallax: &Parallax,
        palettes: &ScenePalettes,
        elapsed_ms: u64,
    ) {
        let area = frame.area();
        let canvas = self.paint(
            area.width,
            area.height,
            snapshot,
            parallax,
            palettes,
            elapsed_ms,
        );
        frame.render_widget(Paragraph::new(canvas.to_lines()), area);
    }
}

fn layer_index(layer: MountainLayer) -> usize {
    match layer {
        MountainLayer::Far => 0,
        MountainLayer::Middle => 1,
        MountainLayer::Close => 2,
    }
}
