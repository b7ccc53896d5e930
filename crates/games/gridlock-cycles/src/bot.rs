use crate::Direction;
use crate::collision::is_collision;
use crate::grid::Grid;

/// Candidate order for direction selection. Earlier entries win ties, so
/// this order is part of the observable behavior.
pub const DIRECTION_ORDER: [Direction; 4] = [
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

/// Number of consecutive collision-free cells reachable from (x, y) in
/// `dir`, starting one step out and exclusive of the blocking cell.
pub fn open_run_length(grid: &Grid, x: i32, y: i32, dir: Direction) -> u32 {
    let (dx, dy) = dir.delta();
    let mut run = 0;
    let (mut px, mut py) = (x + dx, y + dy);
    while !is_collision(grid, px, py) {
        run += 1;
        px += dx;
        py += dy;
    }
    run
}

/// Greedy direction choice for a computer player: the candidate with the
/// strictly longest open run wins, the reverse of `current` is excluded from
/// consideration entirely, and ties keep the earlier candidate. When every
/// candidate run is zero the current heading is kept; the step engine's own
/// collision check resolves the consequences. No lookahead: short open runs
/// can still steer into a dead end.
pub fn pick_direction(grid: &Grid, x: i32, y: i32, current: Direction) -> Direction {
    let mut next = current;
    let mut longest = 0;
    for dir in DIRECTION_ORDER {
        if dir == current.opposite() {
            continue;
        }
        let run = open_run_length(grid, x, y, dir);
        if run > longest {
            longest = run;
            next = dir;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_run_stops_at_wall() {
        let grid = Grid::new(20, 20);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Right), 9);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Left), 10);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Up), 10);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Down), 9);
    }

    #[test]
    fn open_run_stops_at_trail() {
        let mut grid = Grid::new(20, 20);
        grid.mark(14, 10, 2);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Right), 3);
    }

    #[test]
    fn open_run_zero_when_adjacent_blocked() {
        let mut grid = Grid::new(20, 20);
        grid.mark(11, 10, 2);
        assert_eq!(open_run_length(&grid, 10, 10, Direction::Right), 0);
    }

    #[test]
    fn picks_longest_run_excluding_reversal() {
        // Heading Left at (10, 10): Right is the reversal and excluded even
        // though it is also blocked outright. Up and Down both run 5, Left
        // runs 3 — the tie resolves to Up, the earlier candidate.
        let mut grid = Grid::new(20, 20);
        grid.mark(11, 10, 2); // Right: blocked immediately
        grid.mark(10, 4, 2); // Up: run of 5
        grid.mark(6, 10, 2); // Left: run of 3
        grid.mark(10, 16, 2); // Down: run of 5

        assert_eq!(pick_direction(&grid, 10, 10, Direction::Left), Direction::Up);
    }

    #[test]
    fn tie_keeps_earliest_candidate() {
        // Heading Right: candidates Right, Up, Down. Right and Up both run
        // 5, Down runs 2 — Right wins by enumeration order.
        let mut grid = Grid::new(20, 20);
        grid.mark(11, 10, 2); // Right: run of 5
        grid.mark(5, 4, 2); // Up: run of 5
        grid.mark(5, 13, 2); // Down: run of 2

        assert_eq!(pick_direction(&grid, 5, 10, Direction::Right), Direction::Right);
    }

    #[test]
    fn all_blocked_keeps_current_heading() {
        let mut grid = Grid::new(20, 20);
        grid.mark(6, 5, 2);
        grid.mark(4, 5, 2);
        grid.mark(5, 4, 2);
        grid.mark(5, 6, 2);

        assert_eq!(pick_direction(&grid, 5, 5, Direction::Right), Direction::Right);
    }

    #[test]
    fn never_picks_reversal_even_when_only_opening() {
        // Everything but the reversal is blocked; the pick must not reverse.
        let mut grid = Grid::new(20, 20);
        grid.mark(6, 5, 2); // Right blocked
        grid.mark(5, 4, 2); // Up blocked
        grid.mark(5, 6, 2); // Down blocked

        let picked = pick_direction(&grid, 5, 5, Direction::Right);
        assert_ne!(picked, Direction::Left);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        fn direction_strategy() -> impl Strategy<Value = Direction> {
            prop_oneof![
                Just(Direction::Right),
                Just(Direction::Up),
                Just(Direction::Left),
                Just(Direction::Down),
            ]
        }

        proptest! {
            #[test]
            fn pick_never_reverses(
                blocked in proptest::collection::vec((0i32..20, 0i32..20), 0..60),
                x in 1i32..19,
                y in 1i32..19,
                current in direction_strategy(),
            ) {
                let mut grid = Grid::new(20, 20);
                for (bx, by) in blocked {
                    if (bx, by) != (x, y) && grid.cell(bx, by) == crate::grid::Cell::Empty {
                        grid.mark(bx, by, 2);
                    }
                }

                let picked = pick_direction(&grid, x, y, current);
                prop_assert_ne!(picked, current.opposite());
            }

            #[test]
            fn pick_is_pure(
                blocked in proptest::collection::vec((0i32..20, 0i32..20), 0..60),
                x in 1i32..19,
                y in 1i32..19,
                current in direction_strategy(),
            ) {
                let mut grid = Grid::new(20, 20);
                for (bx, by) in blocked {
                    if (bx, by) != (x, y) && grid.cell(bx, by) == crate::grid::Cell::Empty {
                        grid.mark(bx, by, 2);
                    }
                }

                let first = pick_direction(&grid, x, y, current);
                let second = pick_direction(&grid, x, y, current);
                prop_assert_eq!(first, second);
            }
        }
    }
}
