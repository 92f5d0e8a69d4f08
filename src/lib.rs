//! Goban-Engine: a Go board, rules and scoring engine.
//!
//! This crate implements the algorithmic core of a Go application: board
//! state with cached group connectivity, full move legality (captures,
//! suicide, ko and superko), territory identification, rule-variant
//! scoring, and a heuristic life/death estimator. Session management, move
//! trees, SGF and UI concerns are left to callers.
//!
//! ## Modules
//!
//! - [`board`] - Grid state, groups, liberties, hashing, handicap tables
//! - [`rules`] - Legality checks, move execution, ko/superko, rule sets
//! - [`territory`] - Empty-region flood fill and influence estimation
//! - [`scoring`] - Area/territory/Ing scoring systems
//! - [`life_death`] - Heuristic group-status analysis and seki detection
//!
//! ## Example
//!
//! ```
//! use goban_engine::board::{Board, Color};
//! use goban_engine::rules::{MoveResult, RuleSet, Rules};
//!
//! let mut board = Board::new(9);
//! let mut rules = Rules::new(RuleSet::Chinese);
//!
//! assert_eq!(
//!     rules.is_legal_move(&board, 4, 4, Color::Black, None),
//!     MoveResult::Success
//! );
//! let played = rules.execute_move(&mut board, 4, 4, Color::Black, 1).unwrap();
//! assert!(played.captured.is_empty());
//! assert_eq!(board.get(4, 4), Some(Color::Black));
//! ```
//!
//! The engine is synchronous and single-threaded: every operation works on
//! an explicit [`board::Board`] the caller owns, and speculative evaluation
//! always clones the board first.

pub mod board;
pub mod life_death;
pub mod rules;
pub mod scoring;
pub mod territory;
