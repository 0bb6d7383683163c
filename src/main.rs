use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, Board, Difficulty, Game, GameStatus, Orientation, Screen, Settings,
    ShotOutcome, FLEET_PRESETS,
};
use std::fmt::Write as _;
use std::io::{self, Write as _};

/// Player shows the checkerboard hint after this many misses in a row.
const HINT_AFTER_MISSES: u32 = 5;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer, in the terminal", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = AiLevel::Simple)]
    ai: AiLevel,
    #[arg(long, default_value_t = 10, help = "Grid side length (6-15)")]
    size: usize,
    #[arg(long, default_value_t = 0, help = "Fleet preset index (0-2)")]
    fleet: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Always reveal the opponent board (debugging)")]
    reveal: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum AiLevel {
    Simple,
    Smart,
}

impl std::fmt::Display for AiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiLevel::Simple => write!(f, "simple"),
            AiLevel::Smart => write!(f, "smart"),
        }
    }
}

impl From<AiLevel> for Difficulty {
    fn from(level: AiLevel) -> Self {
        match level {
            AiLevel::Simple => Difficulty::Random,
            AiLevel::Smart => Difficulty::Heuristic,
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let preset = FLEET_PRESETS
        .get(cli.fleet)
        .ok_or_else(|| anyhow!("fleet preset {} does not exist (0-2)", cli.fleet))?;
    let settings = Settings::new(cli.ai.into(), cli.size, preset.to_vec())?;

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(settings)?;
    loop {
        game.new_game()?;
        run_placement(&mut game, &mut rng)?;
        run_battle(&mut game, &mut rng, cli.reveal)?;
        print!("\nPlay again? [y/N] ");
        io::stdout().flush()?;
        if !matches!(read_line()?.trim(), "y" | "Y") {
            break;
        }
        game.to_menu();
    }
    Ok(())
}

fn run_placement(game: &mut Game, rng: &mut SmallRng) -> Result<()> {
    println!("\nShip placement: 1 - random, 2 - manual");
    loop {
        print!("> ");
        io::stdout().flush()?;
        match read_line()?.trim() {
            "1" => {
                game.choose_random_placement(rng)?;
                return Ok(());
            }
            "2" => {
                game.choose_manual_placement(rng)?;
                break;
            }
            _ => println!("Enter 1 or 2."),
        }
    }

    while let Some(length) = game.current_ship() {
        println!("\n{}", render_single(game.player_board(), false));
        println!(
            "Place a ship of length {} (e.g. `b4`, or `b4 v` for vertical).",
            length
        );
        println!("Also: `random` places the rest, `clear` starts over.");
        print!("> ");
        io::stdout().flush()?;
        let line = read_line()?;
        let line = line.trim();
        match line {
            "random" => {
                game.randomize_placement(rng)?;
                break;
            }
            "clear" => {
                game.clear_placement()?;
                continue;
            }
            _ => {}
        }
        let mut parts = line.split_whitespace();
        let cell = parts.next().and_then(|c| parse_cell(c, game.settings().grid_size));
        let orientation = match parts.next() {
            Some("v") | Some("V") => Orientation::Vertical,
            _ => Orientation::Horizontal,
        };
        match cell {
            Some((x, y)) => {
                if !game.place_current_ship(x, y, orientation)? {
                    println!("That ship does not fit there.");
                }
            }
            None => println!("Could not read a cell from `{}`.", line),
        }
    }
    game.begin_battle()?;
    Ok(())
}

fn run_battle(game: &mut Game, rng: &mut SmallRng, reveal: bool) -> Result<()> {
    while game.screen() == Screen::Playing {
        println!("\n{}", render_boards(game, reveal));
        print_stats(game);
        if game.stats().consecutive_misses >= HINT_AFTER_MISSES {
            println!("Hint: try shooting in a checkerboard pattern to find ships!");
        }
        print!("Your shot: ");
        io::stdout().flush()?;
        let line = read_line()?;
        let Some((x, y)) = parse_cell(line.trim(), game.settings().grid_size) else {
            println!("Could not read a cell from `{}`.", line.trim());
            continue;
        };
        let exchange = game.fire(x, y, rng)?;
        match exchange.player {
            ShotOutcome::Repeat => {
                println!("You already shot at {}.", cell_name(x, y));
                continue;
            }
            outcome => println!("You fire at {}: {}.", cell_name(x, y), describe(outcome)),
        }
        for event in &exchange.opponent_shots {
            let (ex, ey) = event.cell;
            println!(
                "Opponent fires at {}: {}.",
                cell_name(ex, ey),
                describe(event.outcome)
            );
        }
    }

    println!("\n{}", render_boards(game, true));
    print_stats(game);
    match game.status() {
        GameStatus::PlayerWon => println!("\nVICTORY! You have sunk the enemy fleet."),
        GameStatus::OpponentWon => println!("\nDEFEAT. All your ships have been destroyed."),
        GameStatus::InProgress => {}
    }
    Ok(())
}

fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "miss",
        ShotOutcome::Hit => "hit",
        ShotOutcome::Sunk(_) => "hit, ship sunk",
        ShotOutcome::Repeat => "already shot",
    }
}

fn print_stats(game: &Game) {
    let stats = game.stats();
    let accuracy = stats
        .accuracy()
        .map(|a| format!("{:.1}%", a))
        .unwrap_or_else(|| "-".into());
    println!(
        "Shots: {}   Hits: {}   Misses: {}   Accuracy: {}",
        stats.shots, stats.hits, stats.misses, accuracy
    );
}

/// Parse `b4`-style coordinates: column letter, 1-based row number.
fn parse_cell(input: &str, size: usize) -> Option<(usize, usize)> {
    let mut chars = input.chars();
    let col = chars.next()?.to_ascii_lowercase();
    if !col.is_ascii_lowercase() {
        return None;
    }
    let x = (col as u8 - b'a') as usize;
    let y: usize = chars.as_str().parse::<usize>().ok()?.checked_sub(1)?;
    if x < size && y < size {
        Some((x, y))
    } else {
        None
    }
}

fn cell_name(x: usize, y: usize) -> String {
    format!("{}{}", (b'a' + x as u8) as char, y + 1)
}

fn cell_glyph(board: &Board, x: usize, y: usize, reveal: bool) -> char {
    if board.is_sunk_cell(x, y) {
        '▣'
    } else if board.is_hit_cell(x, y) {
        '✕'
    } else if board.is_miss_cell(x, y) {
        '◌'
    } else if board.is_ship_cell(x, y) && (board.reveals_ships() || reveal) {
        '■'
    } else {
        '·'
    }
}

fn render_single(board: &Board, reveal: bool) -> String {
    let n = board.size();
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..n {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..n {
        let _ = write!(out, "{:>3}", y + 1);
        for x in 0..n {
            let _ = write!(out, " {}", cell_glyph(board, x, y, reveal));
        }
        if y + 1 < n {
            out.push('\n');
        }
    }
    out
}

/// Both boards side by side: your fleet on the left, your shots on the right.
fn render_boards(game: &Game, reveal_opponent: bool) -> String {
    let player = game.player_board();
    let opponent = game.opponent_board();
    let n = player.size();
    let mut out = String::new();
    let width = 3 + 2 * n;
    let _ = writeln!(out, "{:<w$}   {}", "  YOUR FLEET", "  ENEMY WATERS", w = width);
    let left = render_single(player, false);
    let right = render_single(opponent, reveal_opponent);
    for (l, r) in left.lines().zip(right.lines()) {
        let _ = writeln!(out, "{:<w$}   {}", l, r, w = width);
    }
    out.pop();
    out
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(anyhow!("stdin closed"));
    }
    Ok(line)
}
