//! Goban-Engine command line front end.
//!
//! Small driver around the engine crate:
//!
//! - `goban-engine demo` - scripted capture and scoring walkthrough
//! - `goban-engine selfplay` - random legal self-play followed by
//!   dead-stone analysis and scoring

use anyhow::Result;
use clap::{Parser, Subcommand};

use goban_engine::board::{Board, Color, str_coord};
use goban_engine::life_death::DeadStoneAnalyzer;
use goban_engine::rules::{MoveResult, RuleSet, Rules, is_eye};
use goban_engine::scoring::{Winner, create_scoring_system};

/// Goban-Engine: Go board, rules and scoring engine
#[derive(Parser)]
#[command(name = "goban-engine")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through captures, ko and scoring on a 9x9 board
    Demo,
    /// Play random legal moves to the end and score the result
    Selfplay {
        /// Board size (9, 13 or 19)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Rule set: chinese, japanese, aga, ing or new_zealand
        #[arg(long, default_value = "chinese")]
        rules: String,
        /// Komi override (defaults to the rule set's convention)
        #[arg(long)]
        komi: Option<f64>,
        /// RNG seed for reproducible games
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Hard cap on the number of moves
        #[arg(long, default_value_t = 400)]
        max_moves: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Selfplay {
            size,
            rules,
            komi,
            seed,
            max_moves,
        }) => {
            let rule_set: RuleSet = rules.parse()?;
            run_selfplay(size, rule_set, komi, seed, max_moves)
        }
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn run_demo() -> Result<()> {
    println!("Goban-Engine: board, rules and scoring demo\n");

    let mut board = Board::new(9);
    let mut rules = Rules::new(RuleSet::Chinese);
    let mut move_number = 0;

    // black surrounds the white stone at E5, capturing it on the last move
    let script: [(usize, usize, Color); 7] = [
        (4, 3, Color::Black),
        (4, 4, Color::White),
        (3, 4, Color::Black),
        (6, 6, Color::White),
        (5, 4, Color::Black),
        (6, 5, Color::White),
        (4, 5, Color::Black),
    ];

    for (x, y, color) in script {
        move_number += 1;
        let verdict = rules.is_legal_move(&board, x, y, color, None);
        if verdict != MoveResult::Success {
            println!("{color:?} {}: {verdict}", str_coord((x, y), board.size()));
            continue;
        }
        let played = rules
            .execute_move(&mut board, x, y, color, move_number)
            .expect("move was validated");
        print!(
            "{move_number:2}. {color:?} {}",
            str_coord((x, y), board.size())
        );
        if !played.captured.is_empty() {
            let coords: Vec<String> = played
                .captured
                .iter()
                .map(|&p| str_coord(p, board.size()))
                .collect();
            print!("  captures {}", coords.join(" "));
        }
        println!();
    }

    println!("\n{board}");

    let scoring = create_scoring_system(RuleSet::Chinese, None);
    let score = scoring.calculate_score(&board, 0, 0, &Default::default());
    println!(
        "Chinese score: black {:.2}, white {:.2} -> {}",
        score.black_score,
        score.white_score,
        describe_winner(&score.winner, score.margin)
    );
    Ok(())
}

fn run_selfplay(
    size: usize,
    rule_set: RuleSet,
    komi: Option<f64>,
    seed: u64,
    max_moves: u32,
) -> Result<()> {
    let mut board = Board::new(size);
    let mut rules = Rules::with_komi(rule_set, komi.unwrap_or_else(|| rule_set.default_komi()));
    let mut rng = fastrand::Rng::with_seed(seed);

    let mut color = Color::Black;
    let mut ko_point = None;
    let mut captured_black = 0usize;
    let mut captured_white = 0usize;
    let mut passes = 0;
    let mut move_number = 0;

    while passes < 2 && move_number < max_moves {
        move_number += 1;

        // candidates: empty points that are not the mover's own eyes
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if board.is_empty(x, y) && !is_eye(&board, x, y, color) {
                    candidates.push((x, y));
                }
            }
        }
        rng.shuffle(&mut candidates);

        let mut played = None;
        for (x, y) in candidates {
            if rules.is_legal_move(&board, x, y, color, ko_point) != MoveResult::Success {
                continue;
            }
            played = rules
                .execute_move(&mut board, x, y, color, move_number)
                .map(|p| (x, y, p));
            break;
        }

        match played {
            Some((_, _, outcome)) => {
                passes = 0;
                ko_point = outcome.ko_point;
                match color {
                    Color::Black => captured_white += outcome.captured.len(),
                    Color::White => captured_black += outcome.captured.len(),
                }
            }
            None => {
                passes += 1;
                ko_point = None;
            }
        }
        color = color.opposite();
    }

    println!("{board}");
    println!(
        "game over after {move_number} moves (captured: {captured_black} black, {captured_white} white)"
    );

    let mut analyzer = DeadStoneAnalyzer::new(&board);
    let dead = analyzer.find_dead_stones();
    println!("dead-stone suggestion: {} stones", dead.len());

    let scoring = create_scoring_system(rule_set, komi);
    let score = scoring.calculate_score(&board, captured_black, captured_white, &dead);
    println!(
        "{} score: black {:.2}, white {:.2} -> {}",
        rule_set,
        score.black_score,
        score.white_score,
        describe_winner(&score.winner, score.margin)
    );
    Ok(())
}

fn describe_winner(winner: &Winner, margin: f64) -> String {
    match winner {
        Winner::Black => format!("black wins by {margin:.2}"),
        Winner::White => format!("white wins by {margin:.2}"),
        Winner::Draw => "draw".to_string(),
    }
}
