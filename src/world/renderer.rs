//! Backend-neutral 2D drawing for the play view.
//!
//! World code issues draw calls against [`DrawSurface`]; the play screen backs it
//! with an egui painter and tests back it with a recording [`DrawList`].

use glam::Vec2;

/// Opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `other` by `t`, truncating each channel toward zero
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let mix = |a: u8, b: u8| -> u8 {
            let value = a as f32 * (1.0 - t) + b as f32 * t;
            (value as i32).clamp(0, 255) as u8
        };
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Subtract `amount` from every channel, saturating at 0
    pub fn darken(self, amount: u8) -> Rgb {
        Rgb::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Add `amount` to every channel, saturating at 255
    pub fn lighten(self, amount: u8) -> Rgb {
        Rgb::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Shared world palette
pub mod palette {
    use super::Rgb;

    pub const GREEN: Rgb = Rgb::new(0, 200, 0);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 100, 200);
    pub const RED: Rgb = Rgb::new(200, 0, 0);
    pub const TRUNK_BROWN: Rgb = Rgb::new(139, 69, 19);
}

/// RGB color with straight (unmultiplied) alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

impl From<Rgb> for Rgba {
    fn from(color: Rgb) -> Self {
        color.with_alpha(u8::MAX)
    }
}

/// Axis-aligned rectangle in surface or world pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` centered on `center`
    pub fn centered(center: Vec2, size: f32) -> Self {
        Self::from_xywh(center.x - size / 2.0, center.y - size / 2.0, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::from_xywh(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Strict overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Where a text position sits relative to the rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    TopLeft,
    Center,
    TopRight,
}

/// Drawing target for the play view.
///
/// All coordinates are logical surface pixels with the origin in the top-left
/// corner. Implementations clip to their own bounds.
pub trait DrawSurface {
    /// Logical size of the surface
    fn size(&self) -> Vec2;

    /// Cover the whole surface; translucent colors act as an overlay
    fn fill(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fill a convex polygon
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Rgba);

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, color: Rgba);

    /// Draw the player's avatar sprite into `rect`.
    ///
    /// Returns `false` when no sprite is available so the caller can fall back to
    /// primitive shapes.
    fn sprite(&mut self, _rect: Rect, _flip_x: bool) -> bool {
        false
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Fill(Rgba),
    Rect(Rect, Rgba),
    Polygon(Vec<Vec2>, Rgba),
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Rgba,
    },
    Text {
        pos: Vec2,
        anchor: TextAnchor,
        text: String,
        size: f32,
        color: Rgba,
    },
    Sprite {
        rect: Rect,
        flip_x: bool,
    },
}

/// [`DrawSurface`] that records every call instead of rasterizing.
#[derive(Debug, Clone)]
pub struct DrawList {
    size: Vec2,
    has_sprite: bool,
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            has_sprite: false,
            commands: Vec::new(),
        }
    }

    /// Recorder that reports an avatar sprite as available
    pub fn with_sprite(width: f32, height: f32) -> Self {
        Self {
            has_sprite: true,
            ..Self::new(width, height)
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded line segments as `(from, to, color)`
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line {
                from, to, color, ..
            } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    /// Recorded text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::Rect(rect, color));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands
            .push(DrawCommand::Polygon(points.to_vec(), color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn polyline(&mut self, points: &[Vec2], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, anchor: TextAnchor, text: &str, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            pos,
            anchor,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn sprite(&mut self, rect: Rect, flip_x: bool) -> bool {
        if self.has_sprite {
            self.commands.push(DrawCommand::Sprite { rect, flip_x });
        }
        self.has_sprite
    }
}
