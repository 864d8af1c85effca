//! In-memory engine for tests, replays and server-side matches.
//!
//! Bodies, labels and decals are entities in a `hecs` world. Commands are
//! stored as issued; nothing moves on its own and no contacts are detected.
//! Callers produce events with [`HeadlessArcade::contact`] and
//! [`HeadlessArcade::touch_bounds`] and feed them to the match.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};
use tracing::warn;

use crate::engine::{
    ArcadeEvent, ArcadePhysics, BoundsHit, Display, Key, Keyboard, Sprite, TextStyle,
    WorldBoundsEvent,
};

/// Physics body state as last commanded
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub sprite: Sprite,
    pub pos: Vec2,
    pub vel: Vec2,
    pub bounce: Vec2,
    pub collide_world_bounds: bool,
    pub immovable: bool,
    pub on_world_bounds: bool,
}

impl Body {
    pub fn new(sprite: Sprite, pos: Vec2) -> Self {
        Self {
            sprite,
            pos,
            vel: Vec2::ZERO,
            bounce: Vec2::ZERO,
            collide_world_bounds: false,
            immovable: false,
            on_world_bounds: false,
        }
    }
}

/// Bodies whose contacts with the owner are reported
#[derive(Debug, Clone, Default)]
pub struct Colliders(pub Vec<Entity>);

/// Text label
#[derive(Debug, Clone)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
    pub style: TextStyle,
}

/// Static image
#[derive(Debug, Clone, Copy)]
pub struct Decal {
    pub sprite: Sprite,
    pub pos: Vec2,
}

#[derive(Default)]
pub struct HeadlessArcade {
    world: World,
    pressed: HashSet<Key>,
}

impl HeadlessArcade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.pressed.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.pressed.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn body(&self, body: Entity) -> Option<Body> {
        self.world.get::<&Body>(body).ok().map(|b| (*b).clone())
    }

    pub fn text(&self, text: Entity) -> Option<String> {
        self.world.get::<&Label>(text).ok().map(|l| l.text.clone())
    }

    pub fn label(&self, text: Entity) -> Option<Label> {
        self.world.get::<&Label>(text).ok().map(|l| (*l).clone())
    }

    pub fn colliders(&self, body: Entity) -> Vec<Entity> {
        self.world
            .get::<&Colliders>(body)
            .map(|c| c.0.clone())
            .unwrap_or_default()
    }

    pub fn decals(&self) -> Vec<Decal> {
        self.world
            .query::<&Decal>()
            .iter()
            .map(|(_e, decal)| *decal)
            .collect()
    }

    /// Contact event for a pair, if a collider was registered between them
    pub fn contact(&self, body: Entity, other: Entity) -> Option<ArcadeEvent<Entity>> {
        if self.colliders(body).contains(&other) {
            Some(ArcadeEvent::Collide { body, other })
        } else if self.colliders(other).contains(&body) {
            Some(ArcadeEvent::Collide {
                body: other,
                other: body,
            })
        } else {
            None
        }
    }

    /// World-bounds event for a body, if it opted into them
    pub fn touch_bounds(&self, body: Entity, hit: BoundsHit) -> Option<ArcadeEvent<Entity>> {
        self.body(body)
            .filter(|b| b.on_world_bounds)
            .map(|_| ArcadeEvent::WorldBounds(WorldBoundsEvent::new(body, hit)))
    }

    fn with_body(&mut self, body: Entity, apply: impl FnOnce(&mut Body)) {
        match self.world.get::<&mut Body>(body) {
            Ok(mut b) => apply(&mut b),
            Err(_) => warn!(?body, "command for unknown body ignored"),
        }
    }

    fn read_body(&self, body: Entity, read: impl FnOnce(&Body) -> Vec2) -> Vec2 {
        match self.world.get::<&Body>(body) {
            Ok(b) => read(&b),
            Err(_) => {
                warn!(?body, "read from unknown body");
                Vec2::ZERO
            }
        }
    }
}

impl ArcadePhysics for HeadlessArcade {
    type Body = Entity;

    fn spawn_body(&mut self, sprite: Sprite, pos: Vec2) -> Entity {
        self.world.spawn((Body::new(sprite, pos),))
    }

    fn position(&self, body: Entity) -> Vec2 {
        self.read_body(body, |b| b.pos)
    }

    fn set_position(&mut self, body: Entity, pos: Vec2) {
        self.with_body(body, |b| b.pos = pos);
    }

    fn velocity(&self, body: Entity) -> Vec2 {
        self.read_body(body, |b| b.vel)
    }

    fn set_velocity(&mut self, body: Entity, vel: Vec2) {
        self.with_body(body, |b| b.vel = vel);
    }

    fn set_bounce(&mut self, body: Entity, bounce: Vec2) {
        self.with_body(body, |b| b.bounce = bounce);
    }

    fn set_collide_world_bounds(&mut self, body: Entity, collide: bool) {
        self.with_body(body, |b| b.collide_world_bounds = collide);
    }

    fn set_immovable(&mut self, body: Entity, immovable: bool) {
        self.with_body(body, |b| b.immovable = immovable);
    }

    fn set_on_world_bounds(&mut self, body: Entity, enabled: bool) {
        self.with_body(body, |b| b.on_world_bounds = enabled);
    }

    fn add_collider(&mut self, body: Entity, group: &[Entity]) {
        if let Ok(mut colliders) = self.world.get::<&mut Colliders>(body) {
            colliders.0.extend_from_slice(group);
            return;
        }
        if self
            .world
            .insert_one(body, Colliders(group.to_vec()))
            .is_err()
        {
            warn!(?body, "collider for unknown body ignored");
        }
    }
}

impl Keyboard for HeadlessArcade {
    fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

impl Display for HeadlessArcade {
    type Text = Entity;

    fn add_image(&mut self, sprite: Sprite, pos: Vec2) {
        self.world.spawn((Decal { sprite, pos },));
    }

    fn add_text(&mut self, pos: Vec2, initial: &str, style: &TextStyle) -> Entity {
        self.world.spawn((Label {
            pos,
            text: initial.to_string(),
            style: style.clone(),
        },))
    }

    fn set_text(&mut self, text: Entity, value: &str) {
        match self.world.get::<&mut Label>(text) {
            Ok(mut label) => label.text = value.to_string(),
            Err(_) => warn!(?text, "text update for unknown label ignored"),
        }
    }
}
