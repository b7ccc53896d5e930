use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::spawn;

/// Data-driven configuration for a light-cycle match.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclesConfig {
    /// Board width in cells.
    pub grid_width: i32,
    /// Board height in cells.
    pub grid_height: i32,
    /// Fixed step cadence in milliseconds.
    pub step_interval_ms: u64,
    /// Total players per match, humans included. Clamped to the spawn slots.
    pub player_count: u8,
    /// Human players in a PvP match.
    pub pvp_humans: u8,
    /// Human players in a PvE match.
    pub pve_humans: u8,
}

impl Default for CyclesConfig {
    fn default() -> Self {
        Self {
            grid_width: 120,
            grid_height: 90,
            step_interval_ms: 45,
            player_count: 4,
            pvp_humans: 2,
            pve_humans: 1,
        }
    }
}

impl CyclesConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("GRIDLOCK_CYCLES_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/cycles.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }

    /// Step cadence as a duration.
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    /// Clamp loaded values to what the fixed board layout supports.
    pub(crate) fn sanitized(mut self) -> Self {
        self.grid_width = self.grid_width.max(8);
        self.grid_height = self.grid_height.max(8);
        self.step_interval_ms = self.step_interval_ms.max(1);
        self.player_count = self.player_count.clamp(2, spawn::SLOT_COUNT as u8);
        self.pvp_humans = self.pvp_humans.min(self.player_count);
        self.pve_humans = self.pve_humans.min(self.player_count);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_board() {
        let config = CyclesConfig::default();
        assert_eq!(config.grid_width, 120);
        assert_eq!(config.grid_height, 90);
        assert_eq!(config.step_interval_ms, 45);
        assert_eq!(config.player_count, 4);
        assert_eq!(config.step_interval(), Duration::from_millis(45));
    }

    #[test]
    fn sanitize_clamps_player_count_to_spawn_slots() {
        let config = CyclesConfig {
            player_count: 9,
            ..CyclesConfig::default()
        };
        assert_eq!(config.sanitized().player_count, 4);

        let config = CyclesConfig {
            player_count: 0,
            ..CyclesConfig::default()
        };
        assert_eq!(config.sanitized().player_count, 2);
    }

    #[test]
    fn sanitize_caps_humans_at_player_count() {
        let config = CyclesConfig {
            player_count: 2,
            pvp_humans: 4,
            ..CyclesConfig::default()
        };
        assert_eq!(config.sanitized().pvp_humans, 2);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CyclesConfig = toml::from_str("step_interval_ms = 100").unwrap();
        assert_eq!(config.step_interval_ms, 100);
        assert_eq!(config.grid_width, 120);
        assert_eq!(config.player_count, 4);
    }
}
