use rand::{Error, RngCore, SeedableRng};

use crate::components::Side;
use crate::frontend::SoundId;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for the last step
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Opponent => self.opponent = self.opponent.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }
}

/// Random number generator used for serves.
///
/// Wraps any [`RngCore`] so tests can inject a scripted source.
pub struct GameRng(Box<dyn RngCore>);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(Box::new(rand::rngs::StdRng::seed_from_u64(seed)))
    }

    /// Seeded from the wall clock, so every run serves differently
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::info!("Serve RNG seeded with {seed}");
        Self::new(seed)
    }

    pub fn with_source<R: RngCore + 'static>(source: R) -> Self {
        Self(Box::new(source))
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.0.try_fill_bytes(dest)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    /// Sounds to play for this frame, in the order the events happened
    pub fn sounds(&self) -> impl Iterator<Item = SoundId> {
        [
            (self.ball_hit_wall, SoundId::HitWall),
            (self.ball_hit_paddle, SoundId::HitPaddle),
            (self.player_scored || self.opponent_scored, SoundId::PointScored),
        ]
        .into_iter()
        .filter_map(|(fired, sound)| fired.then_some(sound))
    }
}

/// Round state: either the ball is in play, or it waits at centre
/// while the serve countdown runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundState {
    Active,
    Reset { remaining_ms: f32 },
}

impl RoundState {
    pub fn reset(delay_ms: f32) -> Self {
        RoundState::Reset {
            remaining_ms: delay_ms,
        }
    }

    /// Run the countdown by `dt` seconds. Returns true on the frame the
    /// ball goes live.
    pub fn advance(&mut self, dt: f32) -> bool {
        if let RoundState::Reset { remaining_ms } = self {
            *remaining_ms -= dt * 1000.0;
            if *remaining_ms <= 0.0 {
                *self = RoundState::Active;
                return true;
            }
        }
        false
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RoundState::Active)
    }

    /// Countdown left before the serve, 0 once active
    pub fn remaining_ms(&self) -> f32 {
        match self {
            RoundState::Active => 0.0,
            RoundState::Reset { remaining_ms } => *remaining_ms,
        }
    }
}
