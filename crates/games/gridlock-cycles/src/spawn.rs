use serde::{Deserialize, Serialize};

use crate::Direction;
use crate::config::CyclesConfig;

/// Number of fixed starting slots; also the maximum player count.
pub const SLOT_COUNT: usize = 4;

/// A starting cell with its initial heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSlot {
    pub x: i32,
    pub y: i32,
    pub heading: Direction,
}

/// The four fixed starting slots: the front pair faces off across the middle
/// row, the back pair starts on the quarter row heading vertically.
pub fn spawn_slots(config: &CyclesConfig) -> [SpawnSlot; SLOT_COUNT] {
    let w = config.grid_width;
    let h = config.grid_height;
    [
        SpawnSlot {
            x: w / 4,
            y: h / 2,
            heading: Direction::Right,
        },
        SpawnSlot {
            x: 3 * w / 4,
            y: h / 2,
            heading: Direction::Left,
        },
        SpawnSlot {
            x: w / 4,
            y: h / 4,
            heading: Direction::Up,
        },
        SpawnSlot {
            x: 3 * w / 4,
            y: h / 4,
            heading: Direction::Down,
        },
    ]
}
