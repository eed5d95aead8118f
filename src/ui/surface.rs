//! `DrawSurface` backed by an egui painter.
//!
//! Game coordinates are logical pixels of the fixed game canvas; the surface
//! maps them onto the screen with an origin and a uniform scale.

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, TextureId};
use glam::Vec2;

use crate::world::renderer::{DrawSurface, Rect, Rgba, TextAnchor};

fn color(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// Paints game primitives into an egui `Painter`.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
    scale: f32,
    size: Vec2,
    sprite: Option<TextureId>,
}

impl<'a> EguiSurface<'a> {
    /// Fit a `size` canvas into `area`, keeping the aspect ratio and centering it.
    pub fn letterboxed(painter: &'a Painter, area: egui::Rect, size: Vec2) -> Self {
        let scale = (area.width() / size.x).min(area.height() / size.y).max(0.01);
        let drawn = egui::vec2(size.x * scale, size.y * scale);
        let origin = area.center() - drawn / 2.0;

        Self {
            painter,
            origin,
            scale,
            size,
            sprite: None,
        }
    }

    /// Texture used by [`DrawSurface::sprite`]
    pub fn with_sprite(mut self, texture: Option<TextureId>) -> Self {
        self.sprite = texture;
        self
    }

    /// Screen rectangle covered by the canvas
    pub fn screen_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin,
            egui::vec2(self.size.x * self.scale, self.size.y * self.scale),
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Map a game point to the screen
    pub fn to_screen(&self, p: Vec2) -> Pos2 {
        Pos2::new(self.origin.x + p.x * self.scale, self.origin.y + p.y * self.scale)
    }

    /// Map a screen point back into game coordinates
    pub fn to_game(&self, p: Pos2) -> Vec2 {
        Vec2::new(
            (p.x - self.origin.x) / self.scale,
            (p.y - self.origin.y) / self.scale,
        )
    }

    fn to_screen_rect(&self, rect: Rect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.to_screen(Vec2::new(rect.x, rect.y)),
            egui::vec2(rect.w * self.scale, rect.h * self.scale),
        )
    }
}

impl DrawSurface for EguiSurface<'_> {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, c: Rgba) {
        self.painter.rect_filled(self.screen_rect(), 0.0, color(c));
    }

    fn fill_rect(&mut self, rect: Rect, c: Rgba) {
        self.painter.rect_filled(self.to_screen_rect(rect), 0.0, color(c));
    }

    fn fill_polygon(&mut self, points: &[Vec2], c: Rgba) {
        if points.len() < 3 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(Shape::convex_polygon(points, color(c), Stroke::NONE));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, c: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius * self.scale, color(c));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, c: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width * self.scale, color(c)),
        );
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, c: Rgba) {
        if points.len() < 2 {
            return;
        }
        let points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .line(points, Stroke::new(width * self.scale, color(c)));
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, c: Rgba) {
        let align = match anchor {
            TextAnchor::TopLeft => Align2::LEFT_TOP,
            TextAnchor::Center => Align2::CENTER_CENTER,
            TextAnchor::TopRight => Align2::RIGHT_TOP,
        };
        self.painter.text(
            self.to_screen(pos),
            align,
            text,
            FontId::proportional(size * self.scale),
            color(c),
        );
    }

    fn sprite(&mut self, rect: Rect, flip_x: bool) -> bool {
        let Some(texture) = self.sprite else {
            return false;
        };

        let uv = if flip_x {
            egui::Rect::from_min_max(Pos2::new(1.0, 0.0), Pos2::new(0.0, 1.0))
        } else {
            egui::Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0))
        };
        self.painter
            .image(texture, self.to_screen_rect(rect), uv, Color32::WHITE);
        true
    }
}
