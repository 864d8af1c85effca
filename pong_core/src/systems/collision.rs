use glam::Vec2;
use tracing::trace;

use crate::ArcadePhysics;

/// Add spin to the ball after the engine has bounced it off a paddle.
///
/// The vertical velocity grows by `factor` times the signed distance of the
/// ball centre below the paddle centre. Nothing caps the result.
pub fn deflect_ball<P: ArcadePhysics>(
    physics: &mut P,
    ball: P::Body,
    paddle: P::Body,
    factor: f32,
) -> Vec2 {
    let y_diff = physics.position(ball).y - physics.position(paddle).y;
    let vel = physics.velocity(ball);
    let vy = vel.y + y_diff * factor;
    physics.set_velocity_y(ball, vy);
    trace!(y_diff, vy, "ball deflected off paddle");
    Vec2::new(vel.x, vy)
}
