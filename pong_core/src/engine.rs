//! Contract with the arcade engine that hosts the match.
//!
//! The engine owns rendering, physics integration, collision detection and
//! input polling. The match only issues commands against body handles and
//! reacts to the events the engine reports back.

use std::fmt::Debug;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Image keys the scene places or attaches to bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    DottedLine,
    Paddle,
    Ball,
}

/// Keys the match binds to paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

/// Physics body surface of the engine
pub trait ArcadePhysics {
    type Body: Copy + Eq + Debug;

    fn spawn_body(&mut self, sprite: Sprite, pos: Vec2) -> Self::Body;

    fn position(&self, body: Self::Body) -> Vec2;
    fn set_position(&mut self, body: Self::Body, pos: Vec2);

    fn velocity(&self, body: Self::Body) -> Vec2;
    fn set_velocity(&mut self, body: Self::Body, vel: Vec2);

    /// Set only the vertical velocity, keeping the horizontal component
    fn set_velocity_y(&mut self, body: Self::Body, vy: f32) {
        let vel = self.velocity(body);
        self.set_velocity(body, Vec2::new(vel.x, vy));
    }

    fn set_bounce(&mut self, body: Self::Body, bounce: Vec2);
    fn set_collide_world_bounds(&mut self, body: Self::Body, collide: bool);
    fn set_immovable(&mut self, body: Self::Body, immovable: bool);

    /// Opt the body into world-bounds events
    fn set_on_world_bounds(&mut self, body: Self::Body, enabled: bool);

    /// Report contacts between `body` and any member of `group`
    fn add_collider(&mut self, body: Self::Body, group: &[Self::Body]);
}

/// Keyboard state, read once per tick
pub trait Keyboard {
    fn is_down(&self, key: Key) -> bool;
}

/// Font, fill and origin for a text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub fill: String,
    pub origin: Vec2,
}

/// Presentational surface: images and text labels
pub trait Display {
    type Text: Copy + Eq + Debug;

    fn add_image(&mut self, sprite: Sprite, pos: Vec2);
    fn add_text(&mut self, pos: Vec2, initial: &str, style: &TextStyle) -> Self::Text;
    fn set_text(&mut self, text: Self::Text, value: &str);
}

/// Everything a match needs from its host
pub trait Engine: ArcadePhysics + Keyboard + Display {}

impl<T: ArcadePhysics + Keyboard + Display> Engine for T {}

/// Which edges of the world a body touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsHit {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl BoundsHit {
    pub const LEFT: Self = Self { up: false, down: false, left: true, right: false };
    pub const RIGHT: Self = Self { up: false, down: false, left: false, right: true };
    pub const UP: Self = Self { up: true, down: false, left: false, right: false };
    pub const DOWN: Self = Self { up: false, down: true, left: false, right: false };

    /// Side that earns a point when the ball touches these edges.
    /// Leaving on the left scores for the right and vice versa; top and
    /// bottom never score.
    pub fn scoring_side(&self) -> Option<Side> {
        if self.left {
            Some(Side::Left.opponent())
        } else if self.right {
            Some(Side::Right.opponent())
        } else {
            None
        }
    }
}

/// A body touched the edge of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldBoundsEvent<B> {
    pub body: B,
    pub hit: BoundsHit,
}

impl<B> WorldBoundsEvent<B> {
    pub fn new(body: B, hit: BoundsHit) -> Self {
        Self { body, hit }
    }
}

/// Events the engine dispatches into the match between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcadeEvent<B> {
    WorldBounds(WorldBoundsEvent<B>),
    Collide { body: B, other: B },
}
