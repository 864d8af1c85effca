use glam::Vec2;

use crate::components::Side;

/// Rectangular play field, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub width: f32,
    pub height: f32,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Paddle spawn point, `distance` in from the side edge at mid height
    pub fn paddle_spawn(&self, side: Side, distance: f32) -> Vec2 {
        let x = match side {
            Side::Left => distance,
            Side::Right => self.width - distance,
        };
        Vec2::new(x, self.height * 0.5)
    }

    /// Anchor point for a score label, `margin` away from the centre line
    pub fn score_anchor(&self, side: Side, margin: f32) -> Vec2 {
        let center = self.center();
        match side {
            Side::Left => Vec2::new(center.x - margin, center.y),
            Side::Right => Vec2::new(center.x + margin, center.y),
        }
    }
}
