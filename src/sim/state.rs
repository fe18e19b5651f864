//! Core game state - rocks, the climber, and the world that owns them
//!
//! All cross-entity mutation runs through [`GameState`]: the attach and
//! detach setters update both sides of the player/rock relation together
//! so neither side is ever seen half-set.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::sim::clock::ScrollClock;
use crate::sim::queue::RockQueue;
use crate::sim::spawn::Spawner;
use crate::tuning::Tuning;

/// Entities count as off-screen one unit past the visible extent; the
/// first rock also starts this far inside the top edge
pub const EDGE_MARGIN: f32 = 1.0;

/// Number of rock sprite variants a spawn can pick from
pub const ROCK_STYLE_COUNT: u32 = 3;

/// One-shot notifications for external collaborators (audio, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First directional press arrived; the run is live
    Started,
    /// A press matched the front rock
    CorrectMove,
    /// A press missed, or there was no rock left to match
    WrongMove,
    /// Score changed; payload is the new total
    Score(u64),
    /// The rock the player was riding scrolled off-screen
    RockLost,
    /// The run is over; payload is the final score
    RunEnded { score: u64 },
    /// The world was rebuilt from its initial configuration
    WorldReset,
}

/// Which way the climber sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    /// Facing the camera, before the first grab
    #[default]
    Front,
    /// Left hand raised
    Left,
    /// Right hand raised
    Right,
}

/// A climbable rock drifting down the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rock {
    /// Unique entity id
    pub id: u32,
    /// World position
    pub pos: Vec2,
    /// Whether the rock scrolls; false only for the first rock before
    /// the run starts
    pub moving: bool,
    /// Whether the player is riding this rock
    pub attached: bool,
    /// Sprite variant index, in `0..ROCK_STYLE_COUNT`
    pub style: u32,
}

impl Rock {
    pub fn new(id: u32, pos: Vec2, moving: bool, style: u32) -> Self {
        Self {
            id,
            pos,
            moving,
            attached: false,
            style,
        }
    }
}

/// Player attachment state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Not riding anything
    Idle,
    /// Riding a rock, following it at a fixed grip offset
    Attached {
        /// Id of the ridden rock
        rock_id: u32,
        /// Grip offset from the rock's center
        hold: Vec2,
    },
    /// Drifting downward until off-screen, which resets the world
    Falling,
}

/// The climber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// World position
    pub pos: Vec2,
    /// Attachment state machine
    pub state: PlayerState,
    /// Which way the sprite faces
    pub facing: Facing,
    /// Successful grabs this run
    pub score: u64,
    /// Whether any directional press has arrived this run
    pub has_moved: bool,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            state: PlayerState::Idle,
            facing: Facing::Front,
            score: 0,
            has_moved: false,
        }
    }

    /// Id of the ridden rock, if any
    pub fn attached_rock(&self) -> Option<u32> {
        match self.state {
            PlayerState::Attached { rock_id, .. } => Some(rock_id),
            _ => None,
        }
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.state, PlayerState::Falling)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng: Pcg32,
    /// Gameplay balance values
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds since the world was built
    pub level_time: f32,
    /// Ramping scroll speed
    pub clock: ScrollClock,
    /// Rock spawn scheduler
    pub spawner: Spawner,
    /// Live rocks (sorted by id for determinism)
    pub rocks: Vec<Rock>,
    /// Spawn-ordered ids of rocks not yet climbed
    pub queue: RockQueue,
    /// The climber
    pub player: Player,
    /// One-shot events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            clock: ScrollClock::new(
                tuning.scroll_base_speed,
                tuning.scroll_ramp_rate,
                tuning.scroll_max_speed,
            ),
            spawner: Spawner::new(
                tuning.spawn_interval_initial,
                tuning.spawn_interval_min,
                tuning.spawn_band_half_width,
            ),
            tuning,
            time_ticks: 0,
            level_time: 0.0,
            rocks: Vec::new(),
            queue: RockQueue::new(),
            player: Player::new(),
            events: Vec::new(),
            next_id: 0,
        };

        // The first rock waits just inside the top edge, frozen until
        // the first press starts the run
        let start_y = state.tuning.visible_half_height - EDGE_MARGIN;
        state.spawn_rock(start_y, false);

        state
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a rock at a random x within the spawn band and enqueue it
    pub fn spawn_rock(&mut self, y: f32, moving: bool) -> u32 {
        let x = self.spawner.roll_x(&mut self.rng);
        let style = self.rng.random_range(0..ROCK_STYLE_COUNT);
        let id = self.next_entity_id();
        self.rocks.push(Rock::new(id, Vec2::new(x, y), moving, style));
        self.queue.enqueue(id);
        log::debug!("spawned rock {} at ({:.2}, {:.2})", id, x, y);
        id
    }

    pub fn rock(&self, id: u32) -> Option<&Rock> {
        self.rocks.iter().find(|rock| rock.id == id)
    }

    pub fn rock_mut(&mut self, id: u32) -> Option<&mut Rock> {
        self.rocks.iter_mut().find(|rock| rock.id == id)
    }

    /// Start the run: the scroll ramp begins, frozen rocks are released,
    /// and the spawner schedules its first timed rock. Idempotent.
    pub fn begin_run(&mut self) {
        if self.clock.active {
            return;
        }
        self.clock.activate();
        for rock in &mut self.rocks {
            rock.moving = true;
        }
        self.spawner.start(self.level_time);
        self.events.push(GameEvent::Started);
        log::info!("run started (seed {})", self.seed);
    }

    /// Attach the player to a rock at the given grip offset, releasing
    /// any previous attachment first. No-op if the rock does not exist.
    pub fn attach_player(&mut self, rock_id: u32, hold: Vec2) {
        self.detach_player();
        let rock_pos = match self.rock_mut(rock_id) {
            Some(rock) => {
                rock.attached = true;
                rock.pos
            }
            None => return,
        };
        self.player.pos = rock_pos + hold;
        self.player.state = PlayerState::Attached { rock_id, hold };
    }

    /// Clear both sides of the attachment relation; no-op when idle
    pub fn detach_player(&mut self) {
        if let PlayerState::Attached { rock_id, .. } = self.player.state {
            if let Some(rock) = self.rock_mut(rock_id) {
                rock.attached = false;
            }
            self.player.state = PlayerState::Idle;
        }
    }

    /// Drop the player into the falling state, releasing any attachment
    pub fn start_falling(&mut self) {
        self.detach_player();
        self.player.state = PlayerState::Falling;
        log::debug!("player falling at ({:.2}, {:.2})", self.player.pos.x, self.player.pos.y);
    }

    /// Tear the world down and rebuild it from the initial configuration.
    /// The next run draws its seed from this run's RNG, so a whole session
    /// replays from the first seed alone. Pending events survive the
    /// rebuild, bracketed by `RunEnded` and `WorldReset`.
    pub fn reset_world(&mut self) {
        let score = self.player.score;
        let next_seed: u64 = self.rng.random();
        let tuning = self.tuning.clone();
        let mut events = std::mem::take(&mut self.events);
        events.push(GameEvent::RunEnded { score });
        log::info!("run ended with score {}; rebuilding world (seed {})", score, next_seed);
        *self = GameState::with_tuning(next_seed, tuning);
        events.push(GameEvent::WorldReset);
        self.events = events;
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
