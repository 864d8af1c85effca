use glam::Vec2;

/// Which half of the field a paddle (or a score) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Index into per-side arrays (0 = left, 1 = right)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Vertical direction a paddle is asked to move this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Up,
    #[default]
    Stationary,
    Down,
}

/// Movement intent for a paddle, derived from input every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleIntent {
    pub side: Side,
    pub direction: Direction,
}

impl PaddleIntent {
    pub fn new(side: Side, direction: Direction) -> Self {
        Self { side, direction }
    }
}

/// Ball position and velocity as last commanded to the physics body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl BallState {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }
}
