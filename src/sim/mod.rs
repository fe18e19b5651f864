//! Deterministic game simulation
//!
//! The sim is pure: given the same seed, tuning, and input sequence it
//! produces the same state on every platform. Hosts drive it with
//! [`tick`] at a fixed timestep and render whatever [`GameState`] holds.

pub mod clock;
pub mod queue;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::ScrollClock;
pub use queue::RockQueue;
pub use spawn::Spawner;
pub use state::{
    EDGE_MARGIN, Facing, GameEvent, GameState, Player, PlayerState, ROCK_STYLE_COUNT, Rock,
};
pub use tick::{Dir, TickInput, tick};
