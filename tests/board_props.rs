use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seabattle::{
    Board, BoardError, CellState, Difficulty, Settings, ShotOutcome, FLEET_PRESETS,
    GRID_SIZE_MAX, GRID_SIZE_MIN,
};

fn try_random_board(seed: u64, grid_size: usize, preset: usize) -> Result<Board, BoardError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let settings = Settings {
        difficulty: Difficulty::Random,
        grid_size,
        ship_set: FLEET_PRESETS[preset].to_vec(),
    };
    Board::new(false, &settings, &mut rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// After random placement no two ships share a cell or touch, even
    /// diagonally, and the grid agrees with the ship list cell for cell.
    #[test]
    fn placement_exclusivity(
        seed in any::<u64>(),
        grid_size in GRID_SIZE_MIN..=GRID_SIZE_MAX,
        preset in 0..FLEET_PRESETS.len(),
    ) {
        let board = match try_random_board(seed, grid_size, preset) {
            Ok(board) => board,
            // dense fleets may legitimately run out of room on small boards
            Err(BoardError::PlacementExhausted { .. }) => return Ok(()),
            Err(e) => panic!("unexpected placement error: {}", e),
        };

        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET_PRESETS[preset].len());

        let mut occupied = std::collections::HashSet::new();
        for ship in ships {
            for &(x, y) in ship.cells() {
                prop_assert!(board.grid().get(x, y) == Ok(CellState::Ship));
                prop_assert!(occupied.insert((x, y)), "ships overlap at ({},{})", x, y);
            }
        }
        let ship_cells = board
            .grid()
            .iter()
            .filter(|&(_, _, s)| s == CellState::Ship)
            .count();
        prop_assert_eq!(ship_cells, occupied.len());

        for (i, ship) in ships.iter().enumerate() {
            for (j, other) in ships.iter().enumerate() {
                if i == j {
                    continue;
                }
                for &(x, y) in ship.cells() {
                    for &(ox, oy) in other.cells() {
                        let dx = (x as isize - ox as isize).abs();
                        let dy = (y as isize - oy as isize).abs();
                        prop_assert!(dx.max(dy) > 1, "ships {} and {} touch", i, j);
                    }
                }
            }
        }
    }

    /// Repeating any shot classifies as `Repeat` and mutates nothing.
    #[test]
    fn repeat_shot_is_idempotent(
        seed in any::<u64>(),
        x in 0usize..10,
        y in 0usize..10,
        warmup in 0usize..30,
    ) {
        let mut board = match try_random_board(seed, 10, 0) {
            Ok(board) => board,
            Err(_) => return Ok(()),
        };
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..warmup {
            let wx = rng.random_range(0..10);
            let wy = rng.random_range(0..10);
            board.receive_shot(wx, wy);
        }

        let first = board.receive_shot(x, y);
        let grid_after = board.grid().clone();
        let ships_after = board.ships().to_vec();

        let second = board.receive_shot(x, y);
        prop_assert_eq!(second, ShotOutcome::Repeat);
        if first != ShotOutcome::Repeat {
            prop_assert!(first == ShotOutcome::Miss || first.is_hit());
        }
        prop_assert_eq!(board.grid(), &grid_after);
        prop_assert_eq!(board.ships(), &ships_after[..]);
    }

    /// Shooting every ship cell exactly once sinks the whole fleet, and not
    /// a shot earlier.
    #[test]
    fn all_sunk_exactly_when_every_cell_is_hit(
        seed in any::<u64>(),
        preset in 0..FLEET_PRESETS.len(),
    ) {
        let mut board = match try_random_board(seed, 10, preset) {
            Ok(board) => board,
            Err(_) => return Ok(()),
        };
        let cells: Vec<(usize, usize)> = board
            .ships()
            .iter()
            .flat_map(|ship| ship.cells().iter().copied())
            .collect();

        let (last, head) = cells.split_last().unwrap();
        for &(x, y) in head {
            prop_assert!(board.receive_shot(x, y).is_hit());
            prop_assert!(!board.all_sunk());
        }
        prop_assert!(board.receive_shot(last.0, last.1).is_hit());
        prop_assert!(board.all_sunk());
        for ship in board.ships() {
            prop_assert_eq!(ship.hits(), ship.length());
        }
    }

    /// Random targeting only ever picks fresh, in-bounds cells while any
    /// remain.
    #[test]
    fn random_targeting_never_repeats(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::empty(true, 6);
        let mut opponent = seabattle::Opponent::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..36 {
            let cell = opponent.get_move(&mut rng, &board, Difficulty::Random);
            prop_assert!(cell.0 < 6 && cell.1 < 6);
            prop_assert!(seen.insert(cell));
            board.receive_shot(cell.0, cell.1);
        }
    }
}
