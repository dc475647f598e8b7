mod logging;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use horizon_config::Config;
use horizon_core::{Rgb, ScenePalettes};
use horizon_sky::{Animator, DayCycle, Parallax, SceneState, SkySnapshot, SystemClock};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_dir = Config::default_dir().ok();
    let config = match &config_dir {
        Some(dir) => Config::load_or_create(dir)?,
        None => Config::default(),
    };
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = App::new(config, config_dir).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Drives the day cycle.
    animator: Animator<SystemClock>,
    /// Seeded stars and trees.
    scene: SceneState,
    /// Scroll offset for the parallax layers.
    parallax: Parallax,
    /// Loaded configuration.
    config: Config,
    /// Where the configuration lives, if the platform has a config dir.
    config_dir: Option<PathBuf>,
    /// Show the time-of-day overlay.
    show_hud: bool,
    /// Drives star twinkle.
    started: Instant,
    /// Viewport height the animator was last sized for.
    last_height: u16,
    /// Transient status line, e.g. after a reload.
    status: Option<String>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, config_dir: Option<PathBuf>) -> Self {
        let animator = Self::build_animator(&config);
        let scene = Self::build_scene(&config);
        Self {
            running: false,
            animator,
            scene,
            parallax: Parallax::new(config.scene.max_scroll),
            show_hud: config.display.show_hud,
            config,
            config_dir,
            started: Instant::now(),
            last_height: 0,
            status: None,
        }
    }

    fn build_animator(config: &Config) -> Animator<SystemClock> {
        Animator::with_system_clock(
            DayCycle::new(config.cycle.cycle_ms()),
            config.palettes,
        )
        .with_horizon_ratio(config.scene.horizon_ratio)
    }

    fn build_scene(config: &Config) -> SceneState {
        let seed = config.scene.seed.unwrap_or_else(SceneState::seed_from_time);
        SceneState::new(seed, config.scene.star_count, config.scene.tree_density())
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        self.animator.start();
        log::info!("horizon started with seed {}", self.scene.seed());
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.animator.stop();
        log::info!("horizon exiting");
        Ok(())
    }

    /// Snapshot for this frame.
    ///
    /// While paused the last published progress is re-projected so a resize
    /// still places the bodies against the new arc center.
    fn frame_snapshot(&mut self) -> Option<SkySnapshot> {
        if self.animator.is_running() {
            return self.animator.tick().copied();
        }
        let last = self.animator.snapshot()?;
        Some(SkySnapshot::compute(
            last.day_progress,
            self.animator.arc_center_y(),
            self.animator.palettes(),
        ))
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if area.height != self.last_height {
            self.animator.resize(f32::from(area.height));
            self.last_height = area.height;
        }

        let Some(snapshot) = self.frame_snapshot() else {
            return;
        };
        let elapsed_ms = self.started.elapsed().as_millis() as u64;
        self.scene.render(
            frame,
            &snapshot,
            &self.parallax,
            self.animator.palettes(),
            elapsed_ms,
        );

        let text_rgb = overlay_rgb(&snapshot, self.animator.palettes());
        let text_color = Color::from(text_rgb);

        let chunks = Layout::vertical([
            Constraint::Length(1), // HUD
            Constraint::Fill(1),   // Sky above the title
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tagline
            Constraint::Fill(3),   // Scene
            Constraint::Length(1), // Help text
        ])
        .split(area);

        if self.show_hud {
            frame.render_widget(self.hud_line(&snapshot, text_color), chunks[0]);
        }

        // Title and tagline drift down and fade into the sky as the scene scrolls
        let alpha = self.parallax.text_alpha();
        if alpha > 0.0 {
            let faded = Color::from(snapshot.sky_color.lerp(text_rgb, alpha));
            let title_row = shifted(chunks[2], self.parallax.title_shift(), area);
            let tagline_row = shifted(chunks[3], self.parallax.tagline_shift(), area);
            if let Some(row) = title_row {
                let style = Style::new().fg(faded).bold();
                frame.render_widget(overlay_text(&self.config.home.title, style), row);
            }
            if let Some(row) = tagline_row {
                let style = Style::new().fg(faded);
                frame.render_widget(overlay_text(&self.config.home.tagline, style), row);
            }
        }

        frame.render_widget(help_line(text_color), chunks[5]);
    }

    fn hud_line(&self, snapshot: &SkySnapshot, color: Color) -> Line<'static> {
        let mut spans = vec![
            format!(" {} ", snapshot.time_of_day().format("%H:%M"))
                .bold()
                .fg(color),
            snapshot.phase().name().fg(color),
        ];
        if !self.animator.is_running() {
            spans.push("  paused".italic().fg(color));
        }
        if let Some(status) = &self.status {
            spans.push(format!("  {status}").fg(color));
        }
        Line::from(spans)
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with the frame interval as timeout so the sky keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        let timeout = Duration::from_millis(self.config.display.frame_interval_ms());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        self.status = None;
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('p')) => self.toggle_pause(),
            (_, KeyCode::Up | KeyCode::Char('k')) => {
                self.parallax.scroll_by(-self.config.scene.scroll_step)
            }
            (_, KeyCode::Down | KeyCode::Char('j')) => {
                self.parallax.scroll_by(self.config.scene.scroll_step)
            }
            (_, KeyCode::Char('r')) => self.reseed(),
            (_, KeyCode::Char('h')) => self.show_hud = !self.show_hud,
            (_, KeyCode::Char('l')) => self.reload_config(),
            _ => {}
        }
    }

    /// Pause or resume the day cycle.
    fn toggle_pause(&mut self) {
        if self.animator.is_running() {
            self.animator.stop();
        } else {
            self.animator.start();
        }
    }

    /// Regenerate stars and trees from a fresh seed.
    fn reseed(&mut self) {
        let seed = SceneState::seed_from_time();
        self.scene.reseed(seed);
        log::info!("reseeded scene with {seed}");
    }

    /// Re-read the config file and apply what changed.
    fn reload_config(&mut self) {
        let Some(dir) = self.config_dir.clone() else {
            self.status = Some("no config directory".to_string());
            return;
        };
        match self.config.reload(&dir) {
            Ok(Some(fresh)) => {
                self.apply_config(fresh);
                self.status = Some("config reloaded".to_string());
            }
            Ok(None) => self.status = Some("config unchanged".to_string()),
            Err(err) => {
                log::warn!("config reload failed: {err}");
                self.status = Some(format!("config error: {err}"));
            }
        }
    }

    fn apply_config(&mut self, fresh: Config) {
        if fresh.cycle != self.config.cycle
            || fresh.scene.horizon_ratio != self.config.scene.horizon_ratio
        {
            let running = self.animator.is_running();
            let held = self.animator.snapshot().map(|s| s.day_progress);
            self.animator = Self::build_animator(&fresh);
            self.animator.resize(f32::from(self.last_height));
            if running {
                self.animator.start();
            } else if let Some(progress) = held {
                self.animator.hold(progress);
            }
        } else {
            self.animator.set_palettes(fresh.palettes);
        }

        if fresh.scene.star_count != self.config.scene.star_count
            || fresh.scene.tree_density() != self.config.scene.tree_density()
            || fresh.scene.seed != self.config.scene.seed
        {
            self.scene = Self::build_scene(&fresh);
        }

        if fresh.scene.max_scroll != self.config.scene.max_scroll {
            self.parallax = Parallax::new(fresh.scene.max_scroll);
        }
        self.show_hud = fresh.display.show_hud;
        self.config = fresh;
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Text color that stays readable against the current sky.
fn overlay_rgb(snapshot: &SkySnapshot, palettes: &ScenePalettes) -> Rgb {
    if snapshot.is_night {
        palettes.moon
    } else {
        Rgb::new(255, 255, 255).lerp(palettes.sky.night, 0.1)
    }
}

/// Centred text that styles only its own glyphs, leaving the scene around it.
fn overlay_text(text: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center)
}

/// Move a one-row slot down by `shift` rows, or `None` once it leaves `bounds`.
fn shifted(row: Rect, shift: f32, bounds: Rect) -> Option<Rect> {
    let y = u32::from(row.y) + shift.max(0.0).round() as u32;
    if y >= u32::from(bounds.bottom()) {
        return None;
    }
    Some(Rect { y: y as u16, ..row })
}

fn help_line(color: Color) -> Line<'static> {
    Line::from(vec![
        "q".bold().fg(color),
        " quit  ".dark_gray(),
        "p".bold().fg(color),
        " pause  ".dark_gray(),
        "↑↓".bold().fg(color),
        " scroll  ".dark_gray(),
        "r".bold().fg(color),
        " reseed  ".dark_gray(),
        "h".bold().fg(color),
        " hud  ".dark_gray(),
        "l".bold().fg(color),
        " reload".dark_gray(),
    ])
    .centered()
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer, style::Modifier, widgets::Widget};

    use super::*;

    fn app() -> App {
        let mut config = Config::default();
        config.scene.seed = Some(7);
        App::new(config, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            app.running = true;
            press(&mut app, code);
            assert!(!app.running);
        }

        let mut app = app();
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_pause_toggles_animator() {
        let mut app = app();
        app.animator.start();
        press(&mut app, KeyCode::Char('p'));
        assert!(!app.animator.is_running());
        press(&mut app, KeyCode::Char('p'));
        assert!(app.animator.is_running());
    }

    #[test]
    fn test_paused_snapshot_follows_resize() {
        let mut app = app();
        app.animator.resize(40.0);
        app.animator.start();
        let running = app.frame_snapshot().unwrap();

        app.animator.stop();
        app.animator.resize(80.0);
        let paused = app.frame_snapshot().unwrap();
        assert_eq!(paused.day_progress, running.day_progress);
        assert_eq!(paused.arc_center_y, 80.0 * 0.62);
    }

    #[test]
    fn test_scroll_keys_stay_in_range() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.parallax.scroll(), 0.0);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.parallax.scroll(), 2.0);
        for _ in 0..100 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.parallax.scroll(), 40.0);
    }

    #[test]
    fn test_hud_toggle() {
        let mut app = app();
        assert!(app.show_hud);
        press(&mut app, KeyCode::Char('h'));
        assert!(!app.show_hud);
    }

    #[test]
    fn test_reload_without_config_dir() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.status.as_deref(), Some("no config directory"));
    }

    #[test]
    fn test_reload_while_paused_keeps_scene() {
        let mut app = app();
        app.animator.resize(40.0);
        app.last_height = 40;
        app.animator.start();
        let before = app.frame_snapshot().unwrap();
        app.animator.stop();

        let mut fresh = app.config.clone();
        fresh.cycle.length_secs = 60.0;
        app.apply_config(fresh);

        assert!(!app.animator.is_running());
        let after = app.frame_snapshot().unwrap();
        assert_eq!(after.day_progress, before.day_progress);
        assert_eq!(after.arc_center_y, before.arc_center_y);
    }

    #[test]
    fn test_overlay_text_keeps_scene_colors() {
        let sun = Color::Rgb(245, 214, 161);
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        for cell in buf.content.iter_mut() {
            cell.set_symbol("█").set_fg(sun);
        }

        let style = Style::new().fg(Color::Rgb(232, 233, 235)).bold();
        overlay_text("horizon", style).render(area, &mut buf);

        // "horizon" is centred: columns 36..43
        assert_eq!(buf[(36u16, 0u16)].symbol(), "h");
        assert_eq!(buf[(36u16, 0u16)].fg, Color::Rgb(232, 233, 235));
        for x in [0u16, 10, 35, 43, 79] {
            assert_eq!(buf[(x, 0u16)].symbol(), "█");
            assert_eq!(buf[(x, 0u16)].fg, sun);
            assert!(!buf[(x, 0u16)].modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_shifted_rows() {
        let bounds = Rect::new(0, 0, 80, 20);
        let row = Rect::new(0, 5, 80, 1);
        assert_eq!(shifted(row, 0.0, bounds), Some(row));
        assert_eq!(shifted(row, 2.6, bounds).map(|r| r.y), Some(8));
        assert_eq!(shifted(row, -4.0, bounds), Some(row));
        assert_eq!(shifted(row, 15.0, bounds), None);
    }

    #[test]
    fn test_apply_config_rebuilds_scene() {
        let mut app = app();
        let mut fresh = app.config.clone();
        fresh.scene.seed = Some(99);
        fresh.scene.star_count = 10;
        app.apply_config(fresh);
        assert_eq!(app.scene.seed(), 99);
        assert_eq!(app.scene.stars().len(), 10);
    }
}
