//! Buttons drawn on the game canvas with keyboard and mouse selection.

use glam::Vec2;

use crate::world::renderer::{palette, DrawSurface, Rect, Rgb, TextAnchor};

/// A labelled button in canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasButton {
    pub label: &'static str,
    pub rect: Rect,
}

impl CanvasButton {
    pub fn new(label: &'static str, rect: Rect) -> Self {
        Self { label, rect }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.rect.x && p.x < self.rect.right() && p.y >= self.rect.y && p.y < self.rect.bottom()
    }

    fn render(&self, surface: &mut dyn DrawSurface, selected: bool, text_size: f32) {
        let (fg, bg) = if selected {
            (Rgb::WHITE, palette::BLUE)
        } else {
            (palette::LIGHT_GRAY, palette::DARK_GRAY)
        };

        let r = self.rect;
        surface.fill_rect(r, bg.into());
        surface.polyline(
            &[
                Vec2::new(r.x, r.y),
                Vec2::new(r.right(), r.y),
                Vec2::new(r.right(), r.bottom()),
                Vec2::new(r.x, r.bottom()),
                Vec2::new(r.x, r.y),
            ],
            2.0,
            fg.into(),
        );
        surface.text(
            Vec2::new(r.center_x(), r.y + r.h / 2.0),
            TextAnchor::Center,
            self.label,
            text_size,
            fg.into(),
        );
    }
}

/// Vertical stack of buttons with one selected entry.
#[derive(Debug, Clone)]
pub struct ButtonColumn {
    buttons: Vec<CanvasButton>,
    selected: usize,
    text_size: f32,
}

impl ButtonColumn {
    /// Stack `labels` centered on `center_x`, starting at `top` and `spacing` apart.
    pub fn stacked(labels: &[&'static str], center_x: f32, top: f32, size: Vec2, spacing: f32) -> Self {
        let buttons = labels
            .iter()
            .enumerate()
            .map(|(i, &label)| {
                CanvasButton::new(
                    label,
                    Rect::from_xywh(center_x - size.x / 2.0, top + i as f32 * spacing, size.x, size.y),
                )
            })
            .collect();

        Self {
            buttons,
            selected: 0,
            text_size: 32.0,
        }
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn buttons(&self) -> &[CanvasButton] {
        &self.buttons
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection up, wrapping to the last entry
    pub fn select_prev(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = (self.selected + self.buttons.len() - 1) % self.buttons.len();
        }
    }

    /// Move the selection down, wrapping to the first entry
    pub fn select_next(&mut self) {
        if !self.buttons.is_empty() {
            self.selected = (self.selected + 1) % self.buttons.len();
        }
    }

    /// Index of the button under `p`, if any
    pub fn hit(&self, p: Vec2) -> Option<usize> {
        self.buttons.iter().position(|b| b.contains(p))
    }

    /// Select whatever button the pointer is over.
    pub fn hover(&mut self, p: Vec2) {
        if let Some(i) = self.hit(p) {
            self.selected = i;
        }
    }

    pub fn render(&self, surface: &mut dyn DrawSurface) {
        for (i, button) in self.buttons.iter().enumerate() {
            button.render(surface, i == self.selected, self.text_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::renderer::{DrawCommand, DrawList, Rgba};

    fn column() -> ButtonColumn {
        ButtonColumn::stacked(&["One", "Two", "Three"], 640.0, 350.0, Vec2::new(300.0, 60.0), 80.0)
    }

    #[test]
    fn test_selection_wraps() {
        let mut col = column();
        col.select_prev();
        assert_eq!(col.selected(), 2);
        col.select_next();
        assert_eq!(col.selected(), 0);
        col.select_next();
        col.select_next();
        col.select_next();
        assert_eq!(col.selected(), 0);
    }

    #[test]
    fn test_hit_and_hover() {
        let mut col = column();
        assert_eq!(col.hit(Vec2::new(640.0, 460.0)), Some(1));
        assert_eq!(col.hit(Vec2::new(640.0, 415.0)), None);

        col.hover(Vec2::new(500.0, 520.0));
        assert_eq!(col.selected(), 2);
        col.hover(Vec2::new(0.0, 0.0));
        assert_eq!(col.selected(), 2);
    }

    #[test]
    fn test_selected_button_is_highlighted() {
        let col = column();
        let mut list = DrawList::new(1280.0, 720.0);
        col.render(&mut list);

        let fills: Vec<Rgba> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        let expected: Vec<Rgba> = vec![
            palette::BLUE.into(),
            palette::DARK_GRAY.into(),
            palette::DARK_GRAY.into(),
        ];
        assert_eq!(fills, expected);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["One", "Two", "Three"]);
    }
}
