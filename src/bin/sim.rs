use anyhow::{bail, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{Difficulty, Game, GameStatus, Opponent, Screen, Settings};
use serde_json::json;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: u64 = args[2].parse()?;

    let mut player_wins = 0u64;
    let mut opponent_wins = 0u64;
    let mut total_shots = 0u64;

    for i in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i));
        let settings = Settings {
            difficulty: Difficulty::Heuristic,
            ..Settings::default()
        };
        let mut game = Game::new(settings)?;
        game.new_game()?;
        game.choose_random_placement(&mut rng)?;

        // a second targeting engine stands in for the human gunner
        let mut gunner = Opponent::new();
        let cap = game.settings().grid_size.pow(2) * 8;
        let mut moves = 0;
        while game.screen() == Screen::Playing {
            let (x, y) = gunner.get_move(&mut rng, game.opponent_board(), Difficulty::Heuristic);
            game.fire(x, y, &mut rng)?;
            moves += 1;
            if moves > cap {
                bail!("game {} exceeded {} moves without finishing", i, cap);
            }
        }

        match game.status() {
            GameStatus::PlayerWon => player_wins += 1,
            GameStatus::OpponentWon => opponent_wins += 1,
            GameStatus::InProgress => {}
        }
        total_shots += u64::from(game.stats().shots);
    }

    let result = json!({
        "games": games,
        "player_wins": player_wins,
        "opponent_wins": opponent_wins,
        "avg_player_shots": total_shots as f64 / games as f64,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
