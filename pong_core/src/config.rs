use std::path::Path;

use anyhow::Context;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Side;
use crate::engine::{Key, TextStyle};
use crate::map::PlayField;
use crate::params::Params;

/// Up/down keys for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub fn new(up: Key, down: Key) -> Self {
        Self { up, down }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_distance_from_sides: f32,
    pub paddle_speed: f32,
    pub serve_speed: f32,
    pub ball_bounce: f32,
    pub deflection_factor: f32,
    pub score_margin_from_center: f32,
    pub score_font: String,
    pub score_fill: String,
    pub left_keys: KeyBindings,
    pub right_keys: KeyBindings,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_distance_from_sides: Params::PADDLE_DISTANCE_FROM_SIDES,
            paddle_speed: Params::PADDLE_SPEED,
            serve_speed: Params::SERVE_SPEED,
            ball_bounce: Params::BALL_BOUNCE,
            deflection_factor: Params::DEFLECTION_FACTOR,
            score_margin_from_center: Params::SCORE_MARGIN_FROM_CENTER,
            score_font: Params::SCORE_FONT.to_string(),
            score_fill: Params::SCORE_FILL.to_string(),
            left_keys: KeyBindings::new(Key::W, Key::S),
            right_keys: KeyBindings::new(Key::Up, Key::Down),
            seed: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a RON document; missing fields keep their defaults
    pub fn from_ron_str(text: &str) -> anyhow::Result<Self> {
        ron::from_str(text).context("invalid match configuration")
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_ron_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }

    pub fn field(&self) -> PlayField {
        PlayField::new(self.field_width, self.field_height)
    }

    pub fn keys(&self, side: Side) -> KeyBindings {
        match side {
            Side::Left => self.left_keys,
            Side::Right => self.right_keys,
        }
    }

    /// Label style for a side's score; the left label hangs off its right
    /// edge and the right label off its left edge
    pub fn score_style(&self, side: Side) -> TextStyle {
        let origin = match side {
            Side::Left => Vec2::new(1.0, 0.5),
            Side::Right => Vec2::new(0.0, 0.5),
        };
        TextStyle {
            font: self.score_font.clone(),
            fill: self.score_fill.clone(),
            origin,
        }
    }
}
