use gridlock_core::game::MatchEvent;

use crate::MatchState;
use crate::bot;
use crate::collision;

/// Advance every live agent one cell and resolve the outcome against the
/// board. Agents are processed in slot order, which is also the tie-break:
/// when two agents target the same cell in one step, the earlier slot claims
/// it and the later one crashes into the fresh trail.
pub fn run_step(state: &mut MatchState, events: &mut Vec<MatchEvent>) {
    for i in 0..state.agents.len() {
        if !state.agents[i].alive {
            continue;
        }

        // A live agent must never begin a step out of bounds; a fatal move is
        // resolved in the same step that makes it.
        if collision::is_wall_collision(&state.grid, state.agents[i].x, state.agents[i].y) {
            tracing::error!(
                player_id = state.agents[i].id(),
                x = state.agents[i].x,
                y = state.agents[i].y,
                "Live agent out of bounds before its move"
            );
        }

        if !state.agents[i].player.is_human {
            state.agents[i].heading = bot::pick_direction(
                &state.grid,
                state.agents[i].x,
                state.agents[i].y,
                state.agents[i].heading,
            );
        }

        state.agents[i].advance();
        let (x, y) = (state.agents[i].x, state.agents[i].y);
        let player_id = state.agents[i].id();

        if collision::is_collision(&state.grid, x, y) {
            state.agents[i].alive = false;
            state.remaining_alive = state.remaining_alive.saturating_sub(1);
            state.grid.kill_player_cells(player_id);
            tracing::debug!(player_id, x, y, "Agent eliminated");
            events.push(MatchEvent::AgentEliminated { player_id });
        } else {
            state.grid.mark(x, y, player_id);
            events.push(MatchEvent::CellClaimed { player_id, x, y });
        }
    }
}
