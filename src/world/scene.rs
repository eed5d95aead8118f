//! Static scenery: ground strip, buildings and trees.

use glam::Vec2;

use super::renderer::{palette, DrawSurface, Rect, Rgb};
use super::GameRng;

/// World x of each building's left edge
pub const BUILDING_POSITIONS: [f32; 5] = [200.0, 500.0, 800.0, 1200.0, 1600.0];
/// World x of each tree's left edge
pub const TREE_POSITIONS: [f32; 5] = [150.0, 350.0, 650.0, 950.0, 1350.0];

const GROUND_HEIGHT: f32 = 100.0;
const GROUND_LINE_SPACING: usize = 50;
const BUILDING_WIDTH: f32 = 80.0;
const BUILDING_DEPTH: f32 = 40.0;
const TREE_WIDTH: f32 = 20.0;
const TREE_HEIGHT: f32 = 60.0;
/// Fraction of windows that are lit
const LIT_WINDOW_CHANCE: f64 = 0.7;
/// Side of the square probed around the player when interacting
const INTERACT_REACH: f32 = 50.0;

/// Kind of scenery the player can interact with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Building,
    Tree,
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Building => write!(f, "building"),
            ObjectKind::Tree => write!(f, "tree"),
        }
    }
}

/// A window on a building front, relative to the building's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub rect: Rect,
    pub lit: bool,
}

/// Extruded box building
#[derive(Debug, Clone)]
pub struct Building {
    /// Front face in world space
    pub rect: Rect,
    pub color: Rgb,
    pub depth: f32,
    pub windows: Vec<Window>,
}

impl Building {
    fn new(x: f32, ground_level: f32, rng: &mut GameRng) -> Self {
        let height = rng.range_i32(150, 300);

        let mut windows = Vec::new();
        for row in 2..height / 30 {
            for col in 1..3 {
                windows.push(Window {
                    rect: Rect::from_xywh(col as f32 * 25.0, row as f32 * 30.0, 15.0, 20.0),
                    lit: rng.chance(LIT_WINDOW_CHANCE),
                });
            }
        }

        Self {
            rect: Rect::from_xywh(x, ground_level - height as f32, BUILDING_WIDTH, height as f32),
            color: palette::GRAY,
            depth: BUILDING_DEPTH,
            windows,
        }
    }

    fn render(&self, surface: &mut dyn DrawSurface, offset_x: f32) {
        let r = self.rect.translated(Vec2::new(offset_x, 0.0));
        let d = self.depth;

        surface.fill_rect(r, self.color.into());

        let right_face = [
            Vec2::new(r.right(), r.y),
            Vec2::new(r.right() + d, r.y - d),
            Vec2::new(r.right() + d, r.bottom() - d),
            Vec2::new(r.right(), r.bottom()),
        ];
        surface.fill_polygon(&right_face, self.color.darken(30).into());

        let top_face = [
            Vec2::new(r.x, r.y),
            Vec2::new(r.x + d, r.y - d),
            Vec2::new(r.right() + d, r.y - d),
            Vec2::new(r.right(), r.y),
        ];
        surface.fill_polygon(&top_face, self.color.lighten(20).into());

        for window in &self.windows {
            let color = if window.lit {
                palette::YELLOW
            } else {
                palette::DARK_GRAY
            };
            surface.fill_rect(window.rect.translated(Vec2::new(r.x, r.y)), color.into());
        }
    }
}

/// Tree with a trunk and round canopy
#[derive(Debug, Clone, Copy)]
pub struct Tree {
    /// Bounding box in world space
    pub rect: Rect,
}

impl Tree {
    fn render(&self, surface: &mut dyn DrawSurface, offset_x: f32) {
        let r = self.rect.translated(Vec2::new(offset_x, 0.0));
        surface.fill_rect(
            Rect::from_xywh(r.x + 5.0, r.y + 40.0, 10.0, 20.0),
            palette::TRUNK_BROWN.into(),
        );
        surface.fill_circle(Vec2::new(r.center_x(), r.y + 20.0), 25.0, palette::GREEN.into());
    }
}

/// Scenery built once when a play session starts.
#[derive(Debug, Clone)]
pub struct StaticWorld {
    ground: Rect,
    buildings: Vec<Building>,
    trees: Vec<Tree>,
}

impl StaticWorld {
    /// Lay out the world for a `screen_width` by `screen_height` view.
    pub fn new(screen_width: f32, screen_height: f32, rng: &mut GameRng) -> Self {
        let ground_level = screen_height - GROUND_HEIGHT;

        let buildings = BUILDING_POSITIONS
            .iter()
            .map(|&x| Building::new(x, ground_level, rng))
            .collect();

        let trees = TREE_POSITIONS
            .iter()
            .map(|&x| Tree {
                rect: Rect::from_xywh(x, ground_level - TREE_HEIGHT, TREE_WIDTH, TREE_HEIGHT),
            })
            .collect();

        Self {
            ground: Rect::from_xywh(0.0, ground_level, screen_width * 3.0, GROUND_HEIGHT),
            buildings,
            trees,
        }
    }

    /// Top of the ground strip
    pub fn ground_level(&self) -> f32 {
        self.ground.y
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// First building, then tree, whose bounds overlap the reach square
    /// centered on `position`.
    pub fn interact(&self, position: Vec2) -> Option<ObjectKind> {
        let reach = Rect::centered(position, INTERACT_REACH);

        self.buildings
            .iter()
            .find(|b| reach.intersects(&b.rect))
            .map(|_| ObjectKind::Building)
            .or_else(|| {
                self.trees
                    .iter()
                    .find(|t| reach.intersects(&t.rect))
                    .map(|_| ObjectKind::Tree)
            })
    }

    /// Draw the scenery shifted horizontally by `offset_x`.
    pub fn render(&self, surface: &mut dyn DrawSurface, offset_x: f32) {
        let width = surface.size().x;

        let ground = self.ground.translated(Vec2::new(offset_x, 0.0));
        surface.fill_rect(ground, palette::GREEN.into());
        for i in (0..ground.w as usize).step_by(GROUND_LINE_SPACING) {
            let x = ground.x + i as f32;
            if (0.0..=width).contains(&x) {
                surface.line(
                    Vec2::new(x, ground.y),
                    Vec2::new(x, ground.bottom()),
                    2.0,
                    palette::DARK_GRAY.into(),
                );
            }
        }

        for building in &self.buildings {
            let x = building.rect.x + offset_x;
            if (-100.0..=width + 100.0).contains(&x) {
                building.render(surface, offset_x);
            }
        }

        for tree in &self.trees {
            let x = tree.rect.x + offset_x;
            if (-50.0..=width + 50.0).contains(&x) {
                tree.render(surface, offset_x);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::renderer::{DrawCommand, DrawList};

    fn world() -> StaticWorld {
        StaticWorld::new(1280.0, 720.0, &mut GameRng::new(17))
    }

    #[test]
    fn test_layout() {
        let world = world();
        assert_eq!(world.ground_level(), 620.0);
        assert_eq!(world.buildings().len(), 5);
        assert_eq!(world.trees().len(), 5);

        for b in world.buildings() {
            assert!((150.0..=300.0).contains(&b.rect.h));
            assert_eq!(b.rect.bottom(), 620.0);
            let rows = (b.rect.h as usize / 30).saturating_sub(2);
            assert_eq!(b.windows.len(), rows * 2);
        }
        for t in world.trees() {
            assert_eq!(t.rect, Rect::from_xywh(t.rect.x, 560.0, 20.0, 60.0));
        }
    }

    #[test]
    fn test_window_lights_are_fixed_between_frames() {
        let world = world();
        let mut first = DrawList::new(1280.0, 720.0);
        let mut second = DrawList::new(1280.0, 720.0);
        world.render(&mut first, 0.0);
        world.render(&mut second, 0.0);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_interact_prefers_buildings() {
        let world = world();
        assert_eq!(world.interact(Vec2::new(210.0, 600.0)), Some(ObjectKind::Building));
        assert_eq!(world.interact(Vec2::new(160.0, 590.0)), Some(ObjectKind::Tree));
        assert_eq!(world.interact(Vec2::new(1000.0, 300.0)), None);
    }

    #[test]
    fn test_far_objects_are_culled() {
        let world = world();
        let mut list = DrawList::new(1280.0, 720.0);
        world.render(&mut list, -1500.0);

        // Only the building at 1600 (screen x 100) survives culling; no trees.
        let circles = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        let polygons = list
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon(..)))
            .count();
        assert_eq!(circles, 0);
        assert_eq!(polygons, 2);
    }
}
