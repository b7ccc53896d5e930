pub mod game;
pub mod player;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::time::{Duration, Instant};

    use crate::game::{ControlInput, GridlockGame, Phase};

    // ================================================================
    // Game Contract Tests
    // ================================================================
    // A generic suite every GridlockGame implementation must pass. Game
    // crates call these from their own #[cfg(test)] modules with a concrete
    // game instance and that game's step interval.

    /// A start control in the Start phase must enter Running with a
    /// serializable, non-empty state.
    pub fn contract_start_enters_running<G: GridlockGame>(game: &mut G) {
        assert_eq!(game.phase(), Phase::Start, "Games must begin in Start");
        game.apply_control(ControlInput::Start, Instant::now());
        assert_eq!(game.phase(), Phase::Running, "Start must enter Running");
        assert!(
            !game.serialize_state().is_empty(),
            "serialize_state() must return non-empty bytes after start"
        );
    }

    /// Ticking one full step interval past the start must change state.
    pub fn contract_tick_advances_state<G: GridlockGame>(game: &mut G, step: Duration) {
        let base = Instant::now();
        game.apply_control(ControlInput::Start, base);
        let before = game.serialize_state();
        game.tick(base + step);
        assert_ne!(
            before,
            game.serialize_state(),
            "State must change after one full step interval"
        );
    }

    /// Pausing must freeze the serialized state regardless of elapsed time;
    /// resuming must not replay the paused duration as catch-up steps.
    pub fn contract_pause_freezes_state<G: GridlockGame>(game: &mut G, step: Duration) {
        let base = Instant::now();
        game.apply_control(ControlInput::Start, base);
        game.tick(base + step);

        game.apply_control(ControlInput::TogglePause, base + step);
        assert_eq!(game.phase(), Phase::Paused);
        let frozen = game.serialize_state();

        let events = game.tick(base + step * 50);
        assert!(events.is_empty(), "No events may be emitted while paused");
        assert_eq!(
            frozen,
            game.serialize_state(),
            "State must not change while paused"
        );

        game.apply_control(ControlInput::TogglePause, base + step * 50);
        assert_eq!(game.phase(), Phase::Running);

        // No interval has elapsed on the shifted clock: the paused duration
        // must not be replayed as a burst of catch-up steps.
        let resumed = game.serialize_state();
        assert!(
            game.tick(base + step * 50).is_empty(),
            "Resuming must not burst through the paused duration"
        );
        assert_eq!(resumed, game.serialize_state());

        game.tick(base + step * 51);
        assert_ne!(
            resumed,
            game.serialize_state(),
            "State must advance again one interval after resume"
        );
    }

    /// Controls invalid for the current phase must be ignored entirely.
    pub fn contract_invalid_control_ignored<G: GridlockGame>(game: &mut G) {
        assert_eq!(game.phase(), Phase::Start);
        let before = game.serialize_state();
        game.apply_control(ControlInput::Restart, Instant::now());
        game.apply_control(ControlInput::TogglePause, Instant::now());
        assert_eq!(game.phase(), Phase::Start, "Invalid controls must not transition");
        assert_eq!(
            before,
            game.serialize_state(),
            "Invalid controls must not change state"
        );
    }

    /// serialize_state → apply_state roundtrip: state must be stable after
    /// one roundtrip (serialize→apply→serialize→apply→serialize, comparing
    /// the last two).
    pub fn contract_state_roundtrip_stable<G: GridlockGame>(game: &mut G) {
        let state_a = game.serialize_state();
        game.apply_state(&state_a);
        let state_b = game.serialize_state();
        game.apply_state(&state_b);
        let state_c = game.serialize_state();
        assert_eq!(
            state_b, state_c,
            "State must be stable after serialize→apply→serialize roundtrip"
        );
    }

    /// Stepping long enough with no player input must end the match.
    pub fn contract_match_eventually_over<G: GridlockGame>(
        game: &mut G,
        step: Duration,
        max_steps: u32,
    ) {
        let base = Instant::now();
        game.apply_control(ControlInput::Start, base);
        for i in 1..=max_steps {
            game.tick(base + step * i);
            if game.phase() == Phase::GameOver {
                return;
            }
        }
        panic!("Match must reach GameOver within {max_steps} steps");
    }

    /// From GameOver, a restart control must re-enter Running.
    pub fn contract_restart_from_game_over<G: GridlockGame>(game: &mut G) {
        assert_eq!(
            game.phase(),
            Phase::GameOver,
            "Caller must drive the game to GameOver first"
        );
        game.apply_control(ControlInput::Restart, Instant::now());
        assert_eq!(game.phase(), Phase::Running, "Restart must re-enter Running");
        assert!(!game.serialize_state().is_empty());
    }
}
