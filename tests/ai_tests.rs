use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Board, Difficulty, Opponent, Orientation, ShotOutcome};

#[test]
fn test_random_strategy_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = Board::empty(true, 6);
    let mut opponent = Opponent::new();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..36 {
        let (x, y) = opponent.get_move(&mut rng, &board, Difficulty::Random);
        assert!(x < 6 && y < 6);
        assert!(seen.insert((x, y)), "cell ({},{}) targeted twice", x, y);
        assert_eq!(board.receive_shot(x, y), ShotOutcome::Miss);
    }
    // nothing unshot remains: fixed fallback
    assert_eq!(opponent.get_move(&mut rng, &board, Difficulty::Random), (0, 0));
}

#[test]
fn test_heuristic_fallback_when_board_exhausted() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::empty(true, 6);
    for y in 0..6 {
        for x in 0..6 {
            board.receive_shot(x, y);
        }
    }
    let mut opponent = Opponent::new();
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (0, 0)
    );
}

#[test]
fn test_heuristic_drains_neighbors_of_a_hit_in_order() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut board = Board::empty(true, 10);
    board.place(5, 5, 1, Orientation::Horizontal).unwrap();
    assert_eq!(board.receive_shot(5, 5), ShotOutcome::Sunk(1));
    assert!(board.is_hit_cell(5, 5));

    let mut opponent = Opponent::new();
    // east, west, south, north of the lone hit, exactly once each
    let expected = [(6, 5), (4, 5), (5, 6), (5, 4)];
    for &cell in &expected {
        let shot = opponent.get_move(&mut rng, &board, Difficulty::Heuristic);
        assert_eq!(shot, cell);
        assert_eq!(board.receive_shot(shot.0, shot.1), ShotOutcome::Miss);
    }

    // queue is spent and every neighbor is shot: back to the parity sweep
    let (x, y) = opponent.get_move(&mut rng, &board, Difficulty::Heuristic);
    assert_eq!((x + y) % 2, 0);
    assert!(!board.is_shot_cell(x, y));
}

#[test]
fn test_heuristic_edge_hit_skips_out_of_bounds_neighbors() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut board = Board::empty(true, 10);
    board.place(0, 0, 1, Orientation::Horizontal).unwrap();
    board.receive_shot(0, 0);

    let mut opponent = Opponent::new();
    // only east and south exist for a corner hit
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (1, 0)
    );
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (0, 1)
    );
}

#[test]
fn test_heuristic_opens_on_the_checkerboard() {
    let mut rng = SmallRng::seed_from_u64(23);
    let board = Board::empty(true, 10);
    let mut opponent = Opponent::new();
    let (x, y) = opponent.get_move(&mut rng, &board, Difficulty::Heuristic);
    assert_eq!((x + y) % 2, 0);
}

#[test]
fn test_heuristic_widens_when_checkerboard_is_spent() {
    let mut rng = SmallRng::seed_from_u64(31);
    let mut board = Board::empty(true, 6);
    for y in 0..6 {
        for x in 0..6 {
            if (x + y) % 2 == 0 {
                board.receive_shot(x, y);
            }
        }
    }
    let mut opponent = Opponent::new();
    let (x, y) = opponent.get_move(&mut rng, &board, Difficulty::Heuristic);
    assert_eq!((x + y) % 2, 1);
    assert!(!board.is_shot_cell(x, y));
}

#[test]
fn test_reset_drops_pending_targets() {
    let mut rng = SmallRng::seed_from_u64(17);
    let mut board = Board::empty(true, 10);
    board.place(5, 5, 1, Orientation::Horizontal).unwrap();
    board.receive_shot(5, 5);

    let mut opponent = Opponent::new();
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (6, 5)
    );
    // without a reset the queue would continue with (4,5); after a reset the
    // queue is rebuilt from the board and starts over at the east neighbor
    opponent.reset();
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (6, 5)
    );
    assert_eq!(
        opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
        (4, 5)
    );
}

#[test]
fn test_two_separate_hits_both_contribute_targets() {
    let mut rng = SmallRng::seed_from_u64(41);
    let mut board = Board::empty(true, 10);
    board.place(1, 1, 1, Orientation::Horizontal).unwrap();
    board.place(8, 8, 1, Orientation::Horizontal).unwrap();
    board.receive_shot(1, 1);
    board.receive_shot(8, 8);

    let mut opponent = Opponent::new();
    // row-major scan reaches (1,1) first, then (8,8)
    let expected = [
        (2, 1),
        (0, 1),
        (1, 2),
        (1, 0),
        (9, 8),
        (7, 8),
        (8, 9),
        (8, 7),
    ];
    for &cell in &expected {
        assert_eq!(
            opponent.get_move(&mut rng, &board, Difficulty::Heuristic),
            cell
        );
    }
}
