use crate::{ArcadePhysics, Direction, KeyBindings, Keyboard, PaddleIntent, Side};

/// Up wins when both keys are held
pub fn resolve_direction(up_pressed: bool, down_pressed: bool) -> Direction {
    if up_pressed {
        Direction::Up
    } else if down_pressed {
        Direction::Down
    } else {
        Direction::Stationary
    }
}

/// Vertical velocity for a direction; negative is toward the top of the field
pub fn compute_velocity(direction: Direction, speed: f32) -> f32 {
    match direction {
        Direction::Up => -speed,
        Direction::Stationary => 0.0,
        Direction::Down => speed,
    }
}

/// Drives one paddle body from its pair of keys
#[derive(Debug, Clone, Copy)]
pub struct PaddleController<B> {
    side: Side,
    body: B,
    keys: KeyBindings,
    speed: f32,
}

impl<B: Copy> PaddleController<B> {
    pub fn new(side: Side, body: B, keys: KeyBindings, speed: f32) -> Self {
        Self {
            side,
            body,
            keys,
            speed,
        }
    }

    pub fn body(&self) -> B {
        self.body
    }

    /// Read this tick's keys and command the paddle's vertical velocity.
    /// The command is issued even when the paddle stays put.
    pub fn update<E>(&self, engine: &mut E) -> PaddleIntent
    where
        E: ArcadePhysics<Body = B> + Keyboard,
    {
        let direction = resolve_direction(engine.is_down(self.keys.up), engine.is_down(self.keys.down));
        engine.set_velocity_y(self.body, compute_velocity(direction, self.speed));
        PaddleIntent::new(self.side, direction)
    }
}
