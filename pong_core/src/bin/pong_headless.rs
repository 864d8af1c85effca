//! Plays a short scripted rally against the headless engine and logs the
//! result. Usage: `pong_headless [config.ron]`

use glam::Vec2;
use pong_core::{
    logger, ArcadePhysics, BoundsHit, Config, GameRng, HeadlessArcade, Key, Match, Side,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    logger::init()?;

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    let rng = GameRng::from_seed_or_entropy(config.seed);

    let mut arcade = HeadlessArcade::new();
    let mut game = Match::create(&mut arcade, config, rng);

    // Left player climbs, right player holds both keys (up wins)
    arcade.press(Key::W);
    arcade.press(Key::Up);
    arcade.press(Key::Down);
    for _ in 0..3 {
        let intents = game.update(&mut arcade);
        info!(?intents, "tick");
    }
    arcade.release_all();

    // Off-centre return from the right paddle
    let paddle = game.paddle(Side::Right);
    let paddle_pos = arcade.position(paddle);
    arcade.set_position(game.ball(), paddle_pos + Vec2::new(-16.0, 12.0));
    if let Some(event) = arcade.contact(game.ball(), paddle) {
        game.handle_event(&mut arcade, event);
    }
    info!(vel = ?arcade.velocity(game.ball()), "ball after return");

    // Ball slips past the left paddle
    if let Some(event) = arcade.touch_bounds(game.ball(), BoundsHit::LEFT) {
        game.handle_event(&mut arcade, event);
    }

    let score = game.score();
    info!(left = score.left, right = score.right, events = ?game.drain_events(), "rally over");
    Ok(())
}
