//! Match loop: per-tick paddle control plus the collision handlers the
//! engine calls between ticks.

use std::fmt::Debug;

use glam::Vec2;
use tracing::{debug, info, trace};

use crate::systems::{deflect_ball, BallController, PaddleController, ScoreTracker};
use crate::{
    ArcadeEvent, ArcadePhysics, Config, Display, Engine, Events, GameRng, Keyboard, MatchScore,
    PaddleIntent, Side, Sprite, WorldBoundsEvent,
};

/// State of one match, built once when the scene starts.
///
/// `B` is the engine's body handle and `T` its text handle.
pub struct Match<B, T> {
    config: Config,
    rng: GameRng,
    ball: BallController<B>,
    paddles: [PaddleController<B>; 2],
    scoreboard: ScoreTracker<T>,
    events: Events,
}

impl<B, T> Match<B, T>
where
    B: Copy + Eq + Debug,
    T: Copy,
{
    /// Lay out the scene and serve the first ball
    pub fn create<E>(engine: &mut E, config: Config, mut rng: GameRng) -> Self
    where
        E: Engine<Body = B, Text = T>,
    {
        let field = config.field();
        let center = field.center();

        engine.add_image(Sprite::DottedLine, center);

        let paddles = Side::BOTH.map(|side| {
            let pos = field.paddle_spawn(side, config.paddle_distance_from_sides);
            let body = engine.spawn_body(Sprite::Paddle, pos);
            engine.set_collide_world_bounds(body, true);
            engine.set_immovable(body, true);
            PaddleController::new(side, body, config.keys(side), config.paddle_speed)
        });

        let ball_body = engine.spawn_body(Sprite::Ball, center);
        engine.set_collide_world_bounds(ball_body, true);
        engine.set_bounce(ball_body, Vec2::splat(config.ball_bounce));
        engine.set_on_world_bounds(ball_body, true);
        engine.add_collider(ball_body, &paddles.map(|p| p.body()));

        let ball = BallController::new(ball_body, center, config.serve_speed);
        ball.launch(engine, &mut rng);

        let labels = Side::BOTH.map(|side| {
            let pos = field.score_anchor(side, config.score_margin_from_center);
            engine.add_text(pos, "0", &config.score_style(side))
        });

        debug!(
            width = field.width,
            height = field.height,
            "match created"
        );

        Self {
            config,
            rng,
            ball,
            paddles,
            scoreboard: ScoreTracker::new(labels[0], labels[1]),
            events: Events::new(),
        }
    }

    /// One tick: read both paddles' keys and re-issue their velocities
    pub fn update<E>(&self, engine: &mut E) -> [PaddleIntent; 2]
    where
        E: ArcadePhysics<Body = B> + Keyboard,
    {
        self.paddles.map(|paddle| paddle.update(engine))
    }

    /// A body touched the world edge. Left/right exits by the ball score a
    /// point and re-serve; top/bottom are left to the engine's bounce.
    pub fn on_world_boundary<E>(
        &mut self,
        engine: &mut E,
        event: WorldBoundsEvent<B>,
    ) -> Option<MatchScore>
    where
        E: ArcadePhysics<Body = B> + Display<Text = T>,
    {
        if event.body != self.ball.body() {
            trace!(?event, "world bounds event for non-ball body ignored");
            return None;
        }

        let Some(side) = event.hit.scoring_side() else {
            self.events.ball_hit_wall = true;
            return None;
        };

        let score = self.scoreboard.point_scored(engine, side);
        self.events.scored(side);
        info!(?side, left = score.left, right = score.right, "point scored");

        self.ball.reset(engine, &mut self.rng);
        Some(score)
    }

    /// The engine reported ball/paddle contact, in either order.
    /// Returns the ball velocity after the spin is applied.
    pub fn on_paddle_collision<E>(&mut self, engine: &mut E, body: B, other: B) -> Option<Vec2>
    where
        E: ArcadePhysics<Body = B>,
    {
        let ball = self.ball.body();
        let paddle = if body == ball {
            other
        } else if other == ball {
            body
        } else {
            trace!(?body, ?other, "collision without the ball ignored");
            return None;
        };

        if !self.paddles.iter().any(|p| p.body() == paddle) {
            trace!(?paddle, "ball collided with a non-paddle body");
            return None;
        }

        let vel = deflect_ball(engine, ball, paddle, self.config.deflection_factor);
        self.events.ball_hit_paddle = true;
        Some(vel)
    }

    pub fn handle_event<E>(&mut self, engine: &mut E, event: ArcadeEvent<B>)
    where
        E: Engine<Body = B, Text = T>,
    {
        match event {
            ArcadeEvent::WorldBounds(event) => {
                self.on_world_boundary(engine, event);
            }
            ArcadeEvent::Collide { body, other } => {
                self.on_paddle_collision(engine, body, other);
            }
        }
    }

    /// Events raised since the last drain
    pub fn drain_events(&mut self) -> Events {
        std::mem::take(&mut self.events)
    }

    pub fn score(&self) -> MatchScore {
        self.scoreboard.score()
    }

    pub fn ball(&self) -> B {
        self.ball.body()
    }

    pub fn paddle(&self, side: Side) -> B {
        self.paddles[side.index()].body()
    }

    pub fn score_label(&self, side: Side) -> T {
        self.scoreboard.label(side)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoundsHit, Direction, HeadlessArcade, Key};
    use hecs::Entity;

    fn setup() -> (HeadlessArcade, Match<Entity, Entity>) {
        let mut arcade = HeadlessArcade::new();
        let game = Match::create(&mut arcade, Config::new(), GameRng::new(12345));
        (arcade, game)
    }

    #[test]
    fn test_create_lays_out_paddles() {
        let (arcade, game) = setup();
        let left = arcade.body(game.paddle(Side::Left)).unwrap();
        let right = arcade.body(game.paddle(Side::Right)).unwrap();

        assert_eq!(left.pos, Vec2::new(100.0, 400.0));
        assert_eq!(right.pos, Vec2::new(924.0, 400.0));
        for paddle in [left, right] {
            assert_eq!(paddle.sprite, Sprite::Paddle);
            assert!(paddle.immovable);
            assert!(paddle.collide_world_bounds);
            assert!(!paddle.on_world_bounds);
        }
    }

    #[test]
    fn test_create_serves_ball_from_centre() {
        let (arcade, game) = setup();
        let ball = arcade.body(game.ball()).unwrap();

        assert_eq!(ball.pos, Vec2::new(512.0, 400.0));
        assert_eq!(ball.vel.x.abs(), 200.0);
        assert_eq!(ball.bounce, Vec2::ONE);
        assert!(ball.collide_world_bounds);
        assert!(ball.on_world_bounds);
        assert_eq!(
            arcade.colliders(game.ball()),
            vec![game.paddle(Side::Left), game.paddle(Side::Right)]
        );
    }

    #[test]
    fn test_create_adds_scoreboard_and_divider() {
        let (arcade, game) = setup();
        let left = arcade.label(game.score_label(Side::Left)).unwrap();
        let right = arcade.label(game.score_label(Side::Right)).unwrap();

        assert_eq!(left.text, "0");
        assert_eq!(right.text, "0");
        assert_eq!(left.pos, Vec2::new(492.0, 400.0));
        assert_eq!(right.pos, Vec2::new(532.0, 400.0));
        assert_eq!(left.style.origin, Vec2::new(1.0, 0.5));
        assert_eq!(right.style.origin, Vec2::new(0.0, 0.5));

        let decals = arcade.decals();
        assert_eq!(decals.len(), 1);
        assert_eq!(decals[0].sprite, Sprite::DottedLine);
        assert_eq!(decals[0].pos, Vec2::new(512.0, 400.0));
    }

    #[test]
    fn test_update_drives_each_paddle_independently() {
        let (mut arcade, game) = setup();
        arcade.press(Key::S);
        arcade.press(Key::Up);

        let intents = game.update(&mut arcade);

        assert_eq!(intents[0], PaddleIntent::new(Side::Left, Direction::Down));
        assert_eq!(intents[1], PaddleIntent::new(Side::Right, Direction::Up));
        assert_eq!(arcade.velocity(game.paddle(Side::Left)).y, 400.0);
        assert_eq!(arcade.velocity(game.paddle(Side::Right)).y, -400.0);
    }

    #[test]
    fn test_update_leaves_ball_alone() {
        let (mut arcade, game) = setup();
        let before = arcade.velocity(game.ball());
        arcade.press(Key::W);

        game.update(&mut arcade);

        assert_eq!(arcade.velocity(game.ball()), before);
    }

    #[test]
    fn test_right_edge_scores_for_left() {
        let (mut arcade, mut game) = setup();
        arcade.set_position(game.ball(), Vec2::new(1020.0, 80.0));

        let score = game.on_world_boundary(
            &mut arcade,
            WorldBoundsEvent::new(game.ball(), BoundsHit::RIGHT),
        );

        assert_eq!(score, Some(MatchScore { left: 1, right: 0 }));
        assert_eq!(arcade.text(game.score_label(Side::Left)).as_deref(), Some("1"));
        assert_eq!(arcade.position(game.ball()), Vec2::new(512.0, 400.0));
        let events = game.drain_events();
        assert!(events.left_scored);
        assert!(!events.right_scored);
    }

    #[test]
    fn test_top_and_bottom_do_not_score() {
        let (mut arcade, mut game) = setup();
        arcade.set_position(game.ball(), Vec2::new(600.0, 4.0));
        let vel = arcade.velocity(game.ball());

        for hit in [BoundsHit::UP, BoundsHit::DOWN] {
            let score = game.on_world_boundary(&mut arcade, WorldBoundsEvent::new(game.ball(), hit));
            assert_eq!(score, None);
        }

        assert_eq!(game.score(), MatchScore::new());
        assert_eq!(arcade.position(game.ball()), Vec2::new(600.0, 4.0));
        assert_eq!(arcade.velocity(game.ball()), vel);
        let events = game.drain_events();
        assert!(events.ball_hit_wall);
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_world_bounds_for_paddle_ignored() {
        let (mut arcade, mut game) = setup();
        let paddle = game.paddle(Side::Left);

        let score = game.on_world_boundary(&mut arcade, WorldBoundsEvent::new(paddle, BoundsHit::LEFT));

        assert_eq!(score, None);
        assert_eq!(game.score(), MatchScore::new());
        assert_eq!(game.drain_events(), Events::default());
    }

    #[test]
    fn test_paddle_collision_either_order() {
        let (mut arcade, mut game) = setup();
        let paddle = game.paddle(Side::Right);
        arcade.set_position(paddle, Vec2::new(924.0, 300.0));
        arcade.set_position(game.ball(), Vec2::new(910.0, 310.0));
        arcade.set_velocity(game.ball(), Vec2::new(-200.0, 0.0));

        let vel = game.on_paddle_collision(&mut arcade, paddle, game.ball());
        assert_eq!(vel, Some(Vec2::new(-200.0, 50.0)));

        let vel = game.on_paddle_collision(&mut arcade, game.ball(), paddle);
        assert_eq!(vel, Some(Vec2::new(-200.0, 100.0)));
        assert!(game.drain_events().ball_hit_paddle);
    }

    #[test]
    fn test_collision_without_ball_ignored() {
        let (mut arcade, mut game) = setup();
        let left = game.paddle(Side::Left);
        let right = game.paddle(Side::Right);

        assert_eq!(game.on_paddle_collision(&mut arcade, left, right), None);
        assert!(!game.drain_events().ball_hit_paddle);
    }

    #[test]
    fn test_collision_with_non_paddle_ignored() {
        let (mut arcade, mut game) = setup();
        let stray = arcade.spawn_body(Sprite::Paddle, Vec2::new(512.0, 380.0));
        arcade.set_position(game.ball(), Vec2::new(512.0, 400.0));
        let before = arcade.velocity(game.ball());

        assert_eq!(game.on_paddle_collision(&mut arcade, game.ball(), stray), None);
        assert_eq!(arcade.velocity(game.ball()), before);
        assert!(!game.drain_events().ball_hit_paddle);
    }

    #[test]
    fn test_handle_event_dispatches() {
        let (mut arcade, mut game) = setup();
        let event = arcade
            .touch_bounds(game.ball(), BoundsHit::LEFT)
            .expect("ball opts into world bounds");

        game.handle_event(&mut arcade, event);

        assert_eq!(game.score(), MatchScore { left: 0, right: 1 });
    }

    #[test]
    fn test_drain_events_clears() {
        let (mut arcade, mut game) = setup();
        game.on_world_boundary(&mut arcade, WorldBoundsEvent::new(game.ball(), BoundsHit::LEFT));

        assert!(game.drain_events().right_scored);
        assert_eq!(game.drain_events(), Events::default());
    }
}
