pub mod agent;
pub mod bot;
pub mod collision;
pub mod config;
pub mod grid;
pub mod spawn;
pub mod step;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use gridlock_core::game::{ControlInput, GameMetadata, GridlockGame, MatchEvent, Phase};
use gridlock_core::gridlock_game_boilerplate;
use gridlock_core::player::{Player, PlayerColor, PlayerId};

pub use agent::Agent;
use config::CyclesConfig;
use grid::Grid;

/// Cardinal heading on the board. The enumeration order doubles as the
/// heuristic's tie-break order, so it is part of the observable behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// Unit cell offset; row 0 is the top of the board, so Up decreases y.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// The 180° reverse. Never a legal next heading.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Down => Direction::Up,
        }
    }
}

/// Roster selection, toggleable on the start screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    PvP,
    PvE,
}

impl GameMode {
    pub fn toggled(self) -> GameMode {
        match self {
            GameMode::PvP => GameMode::PvE,
            GameMode::PvE => GameMode::PvP,
        }
    }
}

/// Serializable match state: the board, the agents, and the phase
/// bookkeeping. The host clock anchors live on [`LightCycles`] instead —
/// monotonic instants have no meaning inside a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: Phase,
    pub mode: GameMode,
    pub grid: Grid,
    pub agents: Vec<Agent>,
    pub human_count: u8,
    pub computer_count: u8,
    pub remaining_alive: u8,
    pub winner: Option<PlayerId>,
}

/// The light-cycle match. One instance owns the board, the agents, and the
/// state machine; a host drives it once per frame with `tick` and control
/// inputs, and reads state back to render. No globals, no internal threads.
pub struct LightCycles {
    state: MatchState,
    config: CyclesConfig,
    /// Step-clock anchor; advances by whole intervals only, so a delayed
    /// host catches up with extra steps instead of drifting.
    last_step: Option<Instant>,
    pause_entered: Option<Instant>,
}

impl LightCycles {
    pub fn new() -> Self {
        Self::with_config(CyclesConfig::load())
    }

    pub fn with_config(config: CyclesConfig) -> Self {
        let config = config.sanitized();
        Self {
            state: MatchState {
                phase: Phase::Start,
                mode: GameMode::PvP,
                grid: Grid::new(config.grid_width, config.grid_height),
                agents: Vec::new(),
                human_count: 0,
                computer_count: 0,
                remaining_alive: 0,
                winner: None,
            },
            config,
            last_step: None,
            pause_entered: None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn config(&self) -> &CyclesConfig {
        &self.config
    }

    /// Build the roster for the selected mode: humans in the front slots,
    /// computer players filling the rest up to the configured total.
    fn build_roster(&self) -> Vec<Agent> {
        let humans = match self.state.mode {
            GameMode::PvP => self.config.pvp_humans,
            GameMode::PvE => self.config.pve_humans,
        };
        let total = self.config.player_count;
        let slots = spawn::spawn_slots(&self.config);

        let mut agents = Vec::with_capacity(total as usize);
        for i in 0..total {
            let id = i + 1;
            let is_human = i < humans;
            let display_name = if is_human {
                format!("P{}", i + 1)
            } else {
                format!("CPU{}", i - humans + 1)
            };
            let player = Player {
                id,
                display_name,
                color: PlayerColor::for_slot(id),
                is_human,
            };
            agents.push(Agent::at_slot(player, slots[i as usize % slots.len()]));
        }
        agents
    }

    /// Enter RUNNING with a fresh board. Shared by Start and Restart.
    /// Spawn cells stay empty: a cell is claimed only when moved into.
    fn start_match(&mut self, now: Instant) {
        self.state.grid.reset();
        self.state.agents = self.build_roster();
        self.state.human_count =
            self.state.agents.iter().filter(|a| a.player.is_human).count() as u8;
        self.state.computer_count = self.state.agents.len() as u8 - self.state.human_count;
        self.state.remaining_alive = self.state.agents.len() as u8;
        self.state.winner = None;
        self.state.phase = Phase::Running;
        self.last_step = Some(now);
        self.pause_entered = None;
    }

    /// Resolve the match: at most one agent is still alive; none after a
    /// simultaneous death.
    fn conclude(&mut self, events: &mut Vec<MatchEvent>) {
        self.state.winner = self
            .state
            .agents
            .iter()
            .find(|a| a.alive)
            .map(|a| a.player.id);
        self.state.phase = Phase::GameOver;
        events.push(MatchEvent::MatchOver {
            winner: self.state.winner,
        });
    }
}

impl Default for LightCycles {
    fn default() -> Self {
        Self::with_config(CyclesConfig::default())
    }
}

impl GridlockGame for LightCycles {
    type Input = Direction;

    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            name: "Gridlock Cycles".to_string(),
            description: "Leave a permanent trail, dodge every wall, outlast the grid.".to_string(),
            min_players: 2,
            max_players: spawn::SLOT_COUNT as u8,
        }
    }

    fn apply_control(&mut self, input: ControlInput, now: Instant) {
        match (input, self.state.phase) {
            (ControlInput::Start, Phase::Start) => self.start_match(now),
            (ControlInput::Restart, Phase::GameOver) => self.start_match(now),
            (ControlInput::ToggleMode, Phase::Start) => {
                self.state.mode = self.state.mode.toggled();
            },
            (ControlInput::TogglePause, Phase::Running) => {
                self.pause_entered = Some(now);
                self.state.phase = Phase::Paused;
            },
            (ControlInput::TogglePause, Phase::Paused) => {
                // Shift the step clock forward by exactly the paused
                // duration so the cadence resumes without catch-up steps.
                if let (Some(last), Some(entered)) = (self.last_step, self.pause_entered) {
                    self.last_step = Some(last + (now - entered));
                }
                self.pause_entered = None;
                self.state.phase = Phase::Running;
            },
            (input, phase) => {
                tracing::debug!(?input, ?phase, "Dropped control input invalid for phase");
            },
        }
    }

    fn apply_input(&mut self, player_id: PlayerId, input: Direction) {
        if self.state.phase != Phase::Running {
            return;
        }
        let Some(agent) = self
            .state
            .agents
            .iter_mut()
            .find(|a| a.player.id == player_id)
        else {
            tracing::debug!(player_id, "Dropped input for unknown player");
            return;
        };
        // Computer players steer themselves; direction keys only ever route
        // to human slots.
        if !agent.player.is_human {
            return;
        }
        if !agent.alive || input == agent.heading.opposite() {
            return;
        }
        agent.heading = input;
    }

    fn tick(&mut self, now: Instant) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.state.phase != Phase::Running {
            return events;
        }
        let Some(mut last) = self.last_step else {
            return events;
        };

        let interval = self.config.step_interval();
        while now.duration_since(last) >= interval {
            step::run_step(&mut self.state, &mut events);
            last += interval;
            if self.state.remaining_alive <= 1 {
                self.conclude(&mut events);
                break;
            }
        }
        self.last_step = Some(last);
        events
    }

    fn phase(&self) -> Phase {
        self.state.phase
    }

    fn winner_name(&self) -> Option<&str> {
        let id = self.state.winner?;
        self.state
            .agents
            .iter()
            .find(|a| a.player.id == id)
            .map(|a| a.player.display_name.as_str())
    }

    gridlock_game_boilerplate!(state_type: MatchState);
}
