use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::{ArcadePhysics, BallState, GameRng};

/// Random direction scaled to `scale`, uniform over the circle
pub fn random_xy(rng: &mut GameRng, scale: f32) -> Vec2 {
    let angle: f32 = rng.0.gen_range(0.0..TAU);
    Vec2::new(angle.cos(), angle.sin()) * scale
}

/// Force the horizontal component of a random draw to exactly `speed`,
/// keeping its sign; the vertical component passes through.
pub fn serve_velocity(draw: Vec2, speed: f32) -> Vec2 {
    let vx = if draw.x < 0.0 { -speed } else { speed };
    Vec2::new(vx, draw.y)
}

/// Serves and re-centres the ball body
#[derive(Debug, Clone, Copy)]
pub struct BallController<B> {
    body: B,
    center: Vec2,
    serve_speed: f32,
}

impl<B: Copy> BallController<B> {
    pub fn new(body: B, center: Vec2, serve_speed: f32) -> Self {
        Self {
            body,
            center,
            serve_speed,
        }
    }

    pub fn body(&self) -> B {
        self.body
    }

    /// Give the ball a fresh serve velocity
    pub fn launch<P>(&self, physics: &mut P, rng: &mut GameRng) -> BallState
    where
        P: ArcadePhysics<Body = B>,
    {
        let vel = serve_velocity(random_xy(rng, self.serve_speed), self.serve_speed);
        physics.set_velocity(self.body, vel);
        debug!(vx = vel.x, vy = vel.y, "ball served");
        BallState::new(physics.position(self.body), vel)
    }

    /// Move the ball back to the centre of the field and serve again
    pub fn reset<P>(&self, physics: &mut P, rng: &mut GameRng) -> BallState
    where
        P: ArcadePhysics<Body = B>,
    {
        physics.set_position(self.body, self.center);
        self.launch(physics, rng)
    }
}
