use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// Coarse state of a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a start input; mode selection is accepted here.
    #[default]
    Start,
    Running,
    Paused,
    /// Terminal until a restart input.
    GameOver,
}

/// Match-level control inputs a host forwards from its input layer.
/// Each is gated by the current phase; invalid ones are silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlInput {
    Start,
    TogglePause,
    ToggleMode,
    Restart,
}

/// Discrete cues emitted during a tick, consumed by the presentation layer
/// (render deltas, crash sound, game-over banner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    CellClaimed { player_id: PlayerId, x: i32, y: i32 },
    AgentEliminated { player_id: PlayerId },
    MatchOver { winner: Option<PlayerId> },
}

/// Game metadata for a host's selection screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMetadata {
    pub name: String,
    pub description: String,
    pub min_players: u8,
    pub max_players: u8,
}

/// Core contract between a Gridlock game and its host.
///
/// The host owns windowing, rendering, audio, and raw input; the game owns
/// one match instance and is driven synchronously: controls and directional
/// inputs are applied between ticks, never mid-step, and `tick` runs the
/// fixed-cadence simulation against the host's monotonic clock.
pub trait GridlockGame {
    /// Per-player directional input type.
    type Input;

    /// Metadata for the host's selection screen.
    fn metadata(&self) -> GameMetadata;

    /// Apply a phase-gated control input (start, pause, mode, restart).
    fn apply_control(&mut self, input: ControlInput, now: Instant);

    /// Push one player's directional input. No-op outside the running phase.
    fn apply_input(&mut self, player_id: PlayerId, input: Self::Input);

    /// Advance the simulation as far as the clock allows, running zero or
    /// more fixed-interval steps. Returns the discrete events of this call.
    fn tick(&mut self, now: Instant) -> Vec<MatchEvent>;

    /// Current match phase.
    fn phase(&self) -> Phase;

    /// Display name of the winner, once the match is over and one agent
    /// survived. `None` while running or after a simultaneous death.
    fn winner_name(&self) -> Option<&str>;

    /// Serialize the full match state for snapshots.
    fn serialize_state(&self) -> Vec<u8>;

    /// Replace the match state from a snapshot. Malformed bytes are dropped.
    fn apply_state(&mut self, state: &[u8]);
}

/// Generates the two snapshot methods of [`GridlockGame`], identical across
/// games. Requires the implementing struct to have a serializable
/// `state: $StateType` field.
#[macro_export]
macro_rules! gridlock_game_boilerplate {
    (state_type: $StateType:ty) => {
        fn serialize_state(&self) -> Vec<u8> {
            rmp_serde::to_vec(&self.state).expect("game state serialization must succeed")
        }

        fn apply_state(&mut self, state: &[u8]) {
            if let Ok(s) = rmp_serde::from_slice::<$StateType>(state) {
                self.state = s;
            }
        }
    };
}
