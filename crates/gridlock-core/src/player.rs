use serde::{Deserialize, Serialize};

/// Unique identifier for a player slot in a match. Slots are small and fixed;
/// slot order is also the step-processing order.
pub type PlayerId = u8;

/// One participant in a match, human or computer-controlled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub color: PlayerColor,
    pub is_human: bool,
}

/// Trail color selection. The core never draws; renderers map cell owners to
/// these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for PlayerColor {
    fn default() -> Self {
        Self::PALETTE[0]
    }
}

impl PlayerColor {
    /// Predefined palette, assigned to slots in order.
    pub const PALETTE: &[PlayerColor] = &[
        PlayerColor {
            r: 0,
            g: 255,
            b: 255,
        }, // Cyan
        PlayerColor {
            r: 255,
            g: 0,
            b: 255,
        }, // Magenta
        PlayerColor {
            r: 255,
            g: 165,
            b: 0,
        }, // Orange
        PlayerColor {
            r: 0,
            g: 255,
            b: 128,
        }, // Mint green
    ];

    /// Uniform color for the trail of a crashed player.
    pub const CRASHED: PlayerColor = PlayerColor {
        r: 90,
        g: 100,
        b: 110,
    };

    /// Palette color for a player slot (1-based id).
    pub fn for_slot(id: PlayerId) -> PlayerColor {
        Self::PALETTE[(id as usize).saturating_sub(1) % Self::PALETTE.len()]
    }
}
