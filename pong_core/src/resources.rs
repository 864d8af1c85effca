use crate::components::Side;

/// Match score; only ever grows within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchScore {
    pub left: u32,
    pub right: u32,
}

impl MatchScore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award one point to `side` and return the updated score
    pub fn point_scored(&mut self, side: Side) -> MatchScore {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
        *self
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Seeded when a seed is given, otherwise from OS entropy
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Things that happened since the embedding layer last drained them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Left => self.left_scored = true,
            Side::Right => self.right_scored = true,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
