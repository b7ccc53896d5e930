use gridlock_core::player::{Player, PlayerId};
use serde::{Deserialize, Serialize};

use crate::Direction;
use crate::spawn::SpawnSlot;

/// A single player's live game piece: identity plus kinematics. Position is
/// in-bounds for as long as `alive` holds; a fatal move is resolved in the
/// same step that detects it, so a dead agent is never advanced again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub player: Player,
    pub x: i32,
    pub y: i32,
    pub heading: Direction,
    pub alive: bool,
}

impl Agent {
    /// Place a player at a starting slot.
    pub fn at_slot(player: Player, slot: SpawnSlot) -> Self {
        Self {
            player,
            x: slot.x,
            y: slot.y,
            heading: slot.heading,
            alive: true,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.player.id
    }

    /// Advance one cell along the current heading.
    pub fn advance(&mut self) {
        let (dx, dy) = self.heading.delta();
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::player::PlayerColor;

    use super::*;

    fn test_agent(heading: Direction) -> Agent {
        Agent {
            player: Player {
                id: 1,
                display_name: "P1".to_string(),
                color: PlayerColor::default(),
                is_human: true,
            },
            x: 10,
            y: 10,
            heading,
            alive: true,
        }
    }

    #[test]
    fn advance_follows_heading() {
        let mut agent = test_agent(Direction::Right);
        agent.advance();
        assert_eq!((agent.x, agent.y), (11, 10));

        agent.heading = Direction::Up;
        agent.advance();
        assert_eq!((agent.x, agent.y), (11, 9));

        agent.heading = Direction::Down;
        agent.advance();
        agent.advance();
        assert_eq!((agent.x, agent.y), (11, 11));

        agent.heading = Direction::Left;
        agent.advance();
        assert_eq!((agent.x, agent.y), (10, 11));
    }

    #[test]
    fn at_slot_places_and_orients() {
        let slot = SpawnSlot {
            x: 30,
            y: 45,
            heading: Direction::Right,
        };
        let agent = Agent::at_slot(test_agent(Direction::Down).player, slot);
        assert_eq!((agent.x, agent.y), (30, 45));
        assert_eq!(agent.heading, Direction::Right);
        assert!(agent.alive);
    }
}
