//! Final scoring under the supported rule variants.
//!
//! Each rule set gets its own [`ScoringSystem`] implementation; the factory
//! picks one from a [`RuleSet`] and a komi. Area counting credits live
//! stones plus territory, territory counting credits territory plus
//! prisoners, and Ing rules compare area scores against fixed win
//! thresholds.
//!
//! Komi convention: area-counting systems add `komi / 2` to White (the
//! territory-valued komi converted to stone units), territory counting adds
//! the full komi. This halving is a deliberate compatibility convention of
//! this implementation; changing it would change game results.

use std::collections::BTreeSet;

use crate::board::{Board, Color, Point};
use crate::rules::RuleSet;
use crate::territory::{Territory, TerritoryCount};

/// Game result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Full scoring breakdown.
///
/// `black_captures`/`white_captures` are the prisoners *credited to* that
/// side (opponent stones captured during play plus opponent dead stones);
/// they are zero under area counting, which does not use prisoners.
#[derive(Clone, Debug, PartialEq)]
pub struct Score {
    pub black_score: f64,
    pub white_score: f64,
    pub black_territory: usize,
    pub white_territory: usize,
    pub black_stones: usize,
    pub white_stones: usize,
    pub black_captures: usize,
    pub white_captures: usize,
    pub winner: Winner,
    pub margin: f64,
    pub method: RuleSet,
}

/// A rule-variant scoring procedure.
///
/// `captured_black` / `captured_white` are the stones of that color captured
/// during play; `dead_stones` are coordinates the players (or the life/death
/// estimator) marked dead at the end.
pub trait ScoringSystem {
    fn komi(&self) -> f64;

    fn calculate_score(
        &self,
        board: &Board,
        captured_black: usize,
        captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score;
}

/// Territory of each color with dead stones lifted off the board first.
fn territory_with_dead(board: &Board, dead_stones: &BTreeSet<Point>) -> TerritoryCount {
    Territory::new(board).calculate_territory(dead_stones)
}

/// Live stones per color, excluding dead-marked coordinates.
fn live_stones(board: &Board, dead_stones: &BTreeSet<Point>) -> (usize, usize) {
    let mut black = 0;
    let mut white = 0;
    for y in 0..board.size() {
        for x in 0..board.size() {
            if dead_stones.contains(&(x, y)) {
                continue;
            }
            match board.get(x, y) {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
    }
    (black, white)
}

/// Dead-marked stones per color actually present on the board.
fn dead_by_color(board: &Board, dead_stones: &BTreeSet<Point>) -> (usize, usize) {
    let mut black = 0;
    let mut white = 0;
    for &(x, y) in dead_stones {
        match board.get(x, y) {
            Some(Color::Black) => black += 1,
            Some(Color::White) => white += 1,
            None => {}
        }
    }
    (black, white)
}

fn decide_winner(black_score: f64, white_score: f64) -> (Winner, f64) {
    if black_score > white_score {
        (Winner::Black, black_score - white_score)
    } else if white_score > black_score {
        (Winner::White, white_score - black_score)
    } else {
        (Winner::Draw, 0.0)
    }
}

/// Shared area-counting body for the Chinese-family rule sets.
fn area_score(
    board: &Board,
    komi: f64,
    dead_stones: &BTreeSet<Point>,
    method: RuleSet,
) -> Score {
    let territory = territory_with_dead(board, dead_stones);
    let (black_stones, white_stones) = live_stones(board, dead_stones);

    let black_score = (black_stones + territory.black) as f64;
    let white_score = (white_stones + territory.white) as f64 + komi / 2.0;

    let (winner, margin) = decide_winner(black_score, white_score);
    Score {
        black_score,
        white_score,
        black_territory: territory.black,
        white_territory: territory.white,
        black_stones,
        white_stones,
        black_captures: 0,
        white_captures: 0,
        winner,
        margin,
        method,
    }
}

/// Chinese rules: stones plus territory, komi halved into stone units.
pub struct ChineseScoring {
    komi: f64,
}

impl ChineseScoring {
    pub fn new(komi: f64) -> Self {
        Self { komi }
    }
}

impl ScoringSystem for ChineseScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn calculate_score(
        &self,
        board: &Board,
        _captured_black: usize,
        _captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score {
        area_score(board, self.komi, dead_stones, RuleSet::Chinese)
    }
}

/// Japanese rules: territory plus prisoners, full komi to White.
pub struct JapaneseScoring {
    komi: f64,
}

impl JapaneseScoring {
    pub fn new(komi: f64) -> Self {
        Self { komi }
    }
}

impl ScoringSystem for JapaneseScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn calculate_score(
        &self,
        board: &Board,
        captured_black: usize,
        captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score {
        let territory = territory_with_dead(board, dead_stones);
        let (black_stones, white_stones) = live_stones(board, dead_stones);
        let (dead_black, dead_white) = dead_by_color(board, dead_stones);

        let black_captures = captured_white + dead_white;
        let white_captures = captured_black + dead_black;
        let black_score = (territory.black + black_captures) as f64;
        let white_score = (territory.white + white_captures) as f64 + self.komi;

        let (winner, margin) = decide_winner(black_score, white_score);
        Score {
            black_score,
            white_score,
            black_territory: territory.black,
            white_territory: territory.white,
            black_stones,
            white_stones,
            black_captures,
            white_captures,
            winner,
            margin,
            method: RuleSet::Japanese,
        }
    }
}

/// AGA rules: area counting as in the Chinese system.
pub struct AgaScoring {
    komi: f64,
}

impl AgaScoring {
    pub fn new(komi: f64) -> Self {
        Self { komi }
    }
}

impl ScoringSystem for AgaScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn calculate_score(
        &self,
        board: &Board,
        _captured_black: usize,
        _captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score {
        area_score(board, self.komi, dead_stones, RuleSet::Aga)
    }
}

/// Ing rules: area counting judged against fixed fill-the-board thresholds
/// rather than a direct comparison.
pub struct IngScoring {
    komi: f64,
}

impl IngScoring {
    pub fn new(komi: f64) -> Self {
        Self { komi }
    }
}

impl ScoringSystem for IngScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn calculate_score(
        &self,
        board: &Board,
        _captured_black: usize,
        _captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score {
        let mut score = area_score(board, self.komi, dead_stones, RuleSet::Ing);

        // Black must clear half the board plus a point, White just under half.
        let total_points = (board.size() * board.size()) as f64;
        let black_target = (total_points + 1.0) / 2.0;
        let white_target = (total_points - 1.0) / 2.0;

        if score.black_score >= black_target {
            score.winner = Winner::Black;
            score.margin = score.black_score - black_target;
        } else if score.white_score >= white_target {
            score.winner = Winner::White;
            score.margin = score.white_score - white_target;
        } else {
            score.winner = Winner::Draw;
            score.margin = 0.0;
        }
        score
    }
}

/// New Zealand rules: the Chinese procedure with its own komi convention.
pub struct NewZealandScoring {
    komi: f64,
}

impl NewZealandScoring {
    pub fn new(komi: f64) -> Self {
        Self { komi }
    }
}

impl ScoringSystem for NewZealandScoring {
    fn komi(&self) -> f64 {
        self.komi
    }

    fn calculate_score(
        &self,
        board: &Board,
        _captured_black: usize,
        _captured_white: usize,
        dead_stones: &BTreeSet<Point>,
    ) -> Score {
        area_score(board, self.komi, dead_stones, RuleSet::NewZealand)
    }
}

/// Scoring system for `rule_set`, with `komi` falling back to the rule
/// set's conventional value.
pub fn create_scoring_system(rule_set: RuleSet, komi: Option<f64>) -> Box<dyn ScoringSystem> {
    let komi = komi.unwrap_or_else(|| rule_set.default_komi());
    match rule_set {
        RuleSet::Chinese => Box::new(ChineseScoring::new(komi)),
        RuleSet::Japanese => Box::new(JapaneseScoring::new(komi)),
        RuleSet::Aga => Box::new(AgaScoring::new(komi)),
        RuleSet::Ing => Box::new(IngScoring::new(komi)),
        RuleSet::NewZealand => Box::new(NewZealandScoring::new(komi)),
    }
}
