//! Main menu screen.
//!
//! Painted on the game canvas: gradient sky, drifting particles, a pulsing title
//! and a column of buttons driven by arrow keys, Enter/Space or the mouse.

use egui::{Key, Sense, Ui};
use glam::Vec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::ui::surface::EguiSurface;
use crate::ui::widgets::ButtonColumn;
use crate::world::renderer::{palette, DrawSurface, Rect, Rgb, TextAnchor};
use crate::world::weather::skybox::CLEAR_SKY;
use crate::world::GameRng;

const PARTICLE_COUNT: usize = 50;
const GRADIENT_BAND: f32 = 4.0;
const BUTTON_SIZE: Vec2 = Vec2::new(300.0, 60.0);
const BUTTONS_TOP: f32 = 350.0;
const BUTTON_SPACING: f32 = 80.0;

/// What the player picked from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Settings,
    Quit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 3] = [MenuChoice::Start, MenuChoice::Settings, MenuChoice::Quit];

    fn label(&self) -> &'static str {
        match self {
            MenuChoice::Start => "Start Adventure",
            MenuChoice::Settings => "Settings",
            MenuChoice::Quit => "Quit Game",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct MenuParticle {
    x: f32,
    y: f32,
    speed: f32,
    size: f32,
    alpha: u8,
}

/// Main menu state.
#[derive(Debug)]
pub struct MainMenuScreen {
    size: Vec2,
    pulse: f32,
    particles: Vec<MenuParticle>,
    buttons: ButtonColumn,
}

impl MainMenuScreen {
    pub fn new(width: f32, height: f32, rng: &mut GameRng) -> Self {
        let labels: Vec<&'static str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
        let buttons =
            ButtonColumn::stacked(&labels, width / 2.0, BUTTONS_TOP, BUTTON_SIZE, BUTTON_SPACING);

        let mut menu = Self {
            size: Vec2::new(width, height),
            pulse: 0.0,
            particles: Vec::with_capacity(PARTICLE_COUNT),
            buttons,
        };
        menu.reset(rng);
        menu
    }

    /// Reseed the particles and select the first button.
    pub fn reset(&mut self, rng: &mut GameRng) {
        let (w, h) = (self.size.x as i32, self.size.y as i32);
        self.particles = (0..PARTICLE_COUNT)
            .map(|_| MenuParticle {
                x: rng.range_i32(0, w) as f32,
                y: rng.range_i32(0, h) as f32,
                speed: rng.range_f32_inclusive(0.5, 2.0),
                size: rng.range_i32(1, 3) as f32,
                alpha: rng.range_i32(50, 150) as u8,
            })
            .collect();
        self.pulse = 0.0;
        while self.buttons.selected() != 0 {
            self.buttons.select_next();
        }
    }

    /// Advance the title pulse and particle drift.
    pub fn update(&mut self, dt_ms: f32, rng: &mut GameRng) {
        let dt = dt_ms.max(0.0);
        self.pulse += dt * 0.003;

        let (w, h) = (self.size.x, self.size.y);
        for p in &mut self.particles {
            p.y += p.speed * dt * 0.1;
            if p.y > h {
                p.y = -10.0;
                p.x = rng.range_i32(0, w as i32) as f32;
            }
        }
    }

    /// Current title scale, between 1.0 and 1.1
    pub fn title_scale(&self) -> f32 {
        1.0 + 0.1 * self.pulse.sin().abs()
    }

    pub fn selected(&self) -> MenuChoice {
        MenuChoice::ALL[self.buttons.selected()]
    }

    pub fn select_prev(&mut self) {
        self.buttons.select_prev();
    }

    pub fn select_next(&mut self) {
        self.buttons.select_next();
    }

    /// Highlight the button under the pointer.
    pub fn hover(&mut self, p: Vec2) {
        self.buttons.hover(p);
    }

    /// Choice under a click at `p`, selecting it.
    pub fn click(&mut self, p: Vec2) -> Option<MenuChoice> {
        let index = self.buttons.hit(p)?;
        self.buttons.hover(p);
        Some(MenuChoice::ALL[index])
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let (w, h) = (self.size.x, self.size.y);

        let mut y = 0.0;
        while y < h {
            let color = CLEAR_SKY.lerp(palette::DARK_GRAY, y / h);
            surface.fill_rect(Rect::from_xywh(0.0, y, w, GRADIENT_BAND), color.into());
            y += GRADIENT_BAND;
        }

        for p in &self.particles {
            surface.fill_circle(Vec2::new(p.x, p.y), p.size, Rgb::WHITE.with_alpha(p.alpha));
        }

        surface.text(
            Vec2::new(w / 2.0, 150.0),
            TextAnchor::Center,
            "StormRunner",
            64.0 * self.title_scale(),
            Rgb::WHITE.into(),
        );
        surface.text(
            Vec2::new(w / 2.0, 220.0),
            TextAnchor::Center,
            "3D Adventure Game",
            30.0,
            palette::LIGHT_GRAY.into(),
        );

        self.buttons.render(surface);

        surface.text(
            Vec2::new(w / 2.0, h - 50.0),
            TextAnchor::Center,
            "Use Arrow Keys and Enter, or click with mouse",
            18.0,
            palette::GRAY.into(),
        );
        surface.text(
            Vec2::new(w - 10.0, h - 30.0),
            TextAnchor::TopRight,
            &format!("v{}", env!("CARGO_PKG_VERSION")),
            18.0,
            palette::GRAY.into(),
        );
    }

    /// Run one frame of the menu inside `ui`.
    pub fn show(&mut self, ui: &mut Ui, dt_ms: f32, rng: &mut GameRng, audio: &AudioManager) -> Option<MenuChoice> {
        self.update(dt_ms, rng);

        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
        let mut surface = EguiSurface::letterboxed(&painter, response.rect, self.size);

        let (up, down, activate) = ui.input(|i| {
            (
                i.key_pressed(Key::ArrowUp),
                i.key_pressed(Key::ArrowDown),
                i.key_pressed(Key::Enter) || i.key_pressed(Key::Space),
            )
        });

        let mut choice = None;
        if up {
            self.select_prev();
            audio.play_sfx(SoundEffect::ButtonClick);
        }
        if down {
            self.select_next();
            audio.play_sfx(SoundEffect::ButtonClick);
        }
        if activate {
            choice = Some(self.selected());
        }

        if let Some(pos) = response.hover_pos() {
            self.hover(surface.to_game(pos));
        }
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                choice = choice.or_else(|| self.click(surface.to_game(pos)));
            }
        }

        if let Some(choice) = choice {
            audio.play_sfx(SoundEffect::ButtonClick);
            tracing::debug!("Main menu choice: {:?}", choice);
        }

        self.render(&mut surface);
        choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::renderer::{DrawCommand, DrawList};

    fn menu() -> MainMenuScreen {
        MainMenuScreen::new(1280.0, 720.0, &mut GameRng::new(3))
    }

    #[test]
    fn test_particles_seeded_in_range() {
        let menu = menu();
        assert_eq!(menu.particles.len(), PARTICLE_COUNT);
        for p in &menu.particles {
            assert!((0.0..=1280.0).contains(&p.x));
            assert!((0.0..=720.0).contains(&p.y));
            assert!((0.5..=2.0).contains(&p.speed));
            assert!((1.0..=3.0).contains(&p.size));
            assert!((50..=150).contains(&p.alpha));
        }
    }

    #[test]
    fn test_particles_wrap_to_top() {
        let mut menu = menu();
        let mut rng = GameRng::new(4);
        // Slowest particle covers 0.05 px/ms, so 20 s moves everything past the bottom
        menu.update(20_000.0, &mut rng);
        assert!(menu.particles.iter().all(|p| p.y == -10.0));
    }

    #[test]
    fn test_title_pulse_bounds() {
        let mut menu = menu();
        let mut rng = GameRng::new(5);
        assert_eq!(menu.title_scale(), 1.0);
        for _ in 0..200 {
            menu.update(16.0, &mut rng);
            let s = menu.title_scale();
            assert!((1.0..=1.1).contains(&s));
        }
    }

    #[test]
    fn test_keyboard_selection_wraps() {
        let mut menu = menu();
        assert_eq!(menu.selected(), MenuChoice::Start);
        menu.select_prev();
        assert_eq!(menu.selected(), MenuChoice::Quit);
        menu.select_next();
        menu.select_next();
        assert_eq!(menu.selected(), MenuChoice::Settings);
    }

    #[test]
    fn test_click_picks_button() {
        let mut menu = menu();
        assert_eq!(menu.click(Vec2::new(640.0, 540.0)), Some(MenuChoice::Quit));
        assert_eq!(menu.selected(), MenuChoice::Quit);
        assert_eq!(menu.click(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_render_gradient_and_labels() {
        let menu = menu();
        let mut list = DrawList::new(1280.0, 720.0);
        menu.render(&mut list);

        match &list.commands()[0] {
            DrawCommand::Rect(rect, color) => {
                assert_eq!(rect.y, 0.0);
                assert_eq!(color.rgb(), CLEAR_SKY);
            }
            other => panic!("expected gradient band, got {:?}", other),
        }

        let texts: Vec<&str> = list.texts().collect();
        assert!(texts.contains(&"StormRunner"));
        assert!(texts.contains(&"Start Adventure"));
        assert!(texts.contains(&"Quit Game"));
    }
}
