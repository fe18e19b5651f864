//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::state::{EDGE_MARGIN, Facing, GameEvent, GameState, PlayerState};

/// Ticks between autopilot presses in demo mode (about four per second)
const DEMO_PRESS_PERIOD_TICKS: u64 = 30;

/// A directional press, the game's only gameplay input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Left,
    Right,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Edge-triggered directional press, consumed this tick only
    pub press: Option<Dir>,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Idle/demo mode - autopilot plays the game
    let mut input = input.clone();
    if input.idle_mode && input.press.is_none() {
        input.press = demo_press(state);
    }

    state.time_ticks += 1;
    state.level_time += dt;

    // Game-start activation: the first press wakes the scroll ramp,
    // releases the frozen first rock, and arms the spawner
    if input.press.is_some() && !state.player.has_moved {
        state.player.has_moved = true;
        state.begin_run();
    }

    // Scroll clock accrues active time, including the activation tick
    state.clock.tick(dt);
    let scroll_speed = state.clock.current_speed();

    // Rocks drift down at the shared scroll speed
    for rock in &mut state.rocks {
        if rock.moving {
            rock.pos.y -= scroll_speed * dt;
        }
    }

    // Expire rocks that left the screen, notifying a riding player
    despawn_fallen_rocks(state);

    // Attached player follows the ridden rock at the grip offset
    if let PlayerState::Attached { rock_id, hold } = state.player.state {
        let carried = state.rock(rock_id).map(|rock| rock.pos + hold);
        if let Some(pos) = carried {
            state.player.pos = pos;
        }
    }

    // Timed spawns, once the run has started
    if state.spawner.due(state.level_time) {
        let top = state.tuning.visible_half_height + EDGE_MARGIN;
        state.spawn_rock(top, true);
        state.spawner.schedule_next(state.level_time);
    }

    // Resolve at most one directional press; falling players get no say
    if let Some(dir) = input.press {
        if !state.player.is_falling() {
            resolve_press(state, dir);
        }
    }

    // Falling drift, independent of the scroll speed
    if state.player.is_falling() {
        state.player.pos.y -= state.tuning.fall_speed * dt;
    }

    // Catch-all: a player below the screen resets the world no matter
    // how they got there
    let floor = -(state.tuning.visible_half_height + EDGE_MARGIN);
    if state.player.pos.y < floor {
        state.reset_world();
    }
}

/// Remove rocks that dropped below the screen. A ridden rock drops its
/// passenger: the player is notified before the rock disappears, and the
/// queue entry goes with it so a later peek can never see a dead rock.
fn despawn_fallen_rocks(state: &mut GameState) {
    let floor = -(state.tuning.visible_half_height + EDGE_MARGIN);
    let expired: Vec<u32> = state
        .rocks
        .iter()
        .filter(|rock| rock.pos.y < floor)
        .map(|rock| rock.id)
        .collect();

    for id in expired {
        if state.player.attached_rock() == Some(id) {
            state.start_falling();
            state.events.push(GameEvent::RockLost);
            log::info!("rock {} scrolled away under the player", id);
        }
        state.queue.remove(id);
        state.rocks.retain(|rock| rock.id != id);
        log::debug!("rock {} left the screen", id);
    }
}

/// Judge a directional press against the front of the queue
fn resolve_press(state: &mut GameState, dir: Dir) {
    let front = state
        .queue
        .peek_front()
        .and_then(|id| state.rock(id).map(|rock| (id, rock.pos)));

    let Some((rock_id, rock_pos)) = front else {
        // Nothing left to climb
        state.events.push(GameEvent::WrongMove);
        log::debug!("press with no rock to match");
        state.start_falling();
        return;
    };

    let pressed_left = dir == Dir::Left;
    let rock_on_left = rock_pos.x < state.player.pos.x;

    if pressed_left == rock_on_left {
        // Match: snap onto the rock, gripping past its center
        state.events.push(GameEvent::CorrectMove);
        let hold = Vec2::new(
            if pressed_left {
                state.tuning.snap_offset_x
            } else {
                -state.tuning.snap_offset_x
            },
            state.tuning.snap_offset_y,
        );
        state.attach_player(rock_id, hold);
        state.player.facing = if pressed_left { Facing::Left } else { Facing::Right };
        state.queue.pop_front();
        state.player.score += 1;
        state.events.push(GameEvent::Score(state.player.score));
        log::debug!("grabbed rock {} (score {})", rock_id, state.player.score);
    } else {
        state.events.push(GameEvent::WrongMove);
        log::debug!("wrong direction, player falling");
        state.start_falling();
    }
}

/// Autopilot for demo mode: press toward the front rock on a fixed cadence
fn demo_press(state: &GameState) -> Option<Dir> {
    if state.player.is_falling() {
        return None;
    }
    if state.time_ticks % DEMO_PRESS_PERIOD_TICKS != 0 {
        return None;
    }
    let front = state.queue.peek_front()?;
    let rock = state.rock(front)?;
    Some(if rock.pos.x < state.player.pos.x {
        Dir::Left
    } else {
        Dir::Right
    })
}
