//! Rule enforcement and move execution.
//!
//! The rules engine decides legality of a candidate move (bounds, occupancy,
//! ko, suicide, superko), executes accepted moves with capture resolution,
//! and maintains the position-hash history used for superko detection. It
//! also offers heuristic queries used by analysis collaborators: group status
//! reports, eye detection, and capturing/atari move search.
//!
//! Legality outcomes are a closed enumeration returned by value; the engine
//! never panics on an illegal candidate. All simulation happens on board
//! clones, so a legality check leaves the caller's board untouched.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Color, GroupId, Point};

/// Maximum number of position hashes retained for superko detection.
pub const MAX_POSITION_HISTORY: usize = 50;

/// How many recent positions a candidate move is checked against.
pub const SUPERKO_WINDOW: usize = 8;

/// Outcome of a legality check.
///
/// `Illegal` is reserved for callers (e.g. a session rejecting moves after
/// the game has ended); the engine itself always reports a specific reason.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Success,
    Illegal,
    Ko,
    Suicide,
    Occupied,
    OutOfBounds,
    Superko,
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MoveResult::Success => "success",
            MoveResult::Illegal => "illegal",
            MoveResult::Ko => "retakes ko",
            MoveResult::Suicide => "suicide",
            MoveResult::Occupied => "point occupied",
            MoveResult::OutOfBounds => "out of bounds",
            MoveResult::Superko => "repeats earlier position",
        };
        write!(f, "{s}")
    }
}

/// Supported rule sets.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RuleSet {
    Chinese,
    Japanese,
    Aga,
    Ing,
    NewZealand,
}

impl RuleSet {
    /// Conventional komi for this rule set.
    pub fn default_komi(self) -> f64 {
        match self {
            RuleSet::Chinese => 7.5,
            RuleSet::Japanese => 6.5,
            RuleSet::Aga => 7.5,
            RuleSet::Ing => 8.0,
            RuleSet::NewZealand => 7.5,
        }
    }

    /// The feature block governing legality and scoring for this rule set.
    ///
    /// Ing and New Zealand rules reuse the Chinese block apart from komi.
    pub fn features(self) -> RuleFeatures {
        match self {
            RuleSet::Chinese | RuleSet::Ing | RuleSet::NewZealand => RuleFeatures {
                scoring: ScoringKind::Area,
                suicide_allowed: false,
                superko: SuperkoPolicy::Positional,
                pass_stones: 0,
                territory_in_seki: false,
                komi_default: self.default_komi(),
            },
            RuleSet::Japanese => RuleFeatures {
                scoring: ScoringKind::Territory,
                suicide_allowed: false,
                superko: SuperkoPolicy::Situational,
                pass_stones: 1,
                territory_in_seki: false,
                komi_default: 6.5,
            },
            RuleSet::Aga => RuleFeatures {
                scoring: ScoringKind::Area,
                suicide_allowed: false,
                superko: SuperkoPolicy::Situational,
                pass_stones: 1,
                territory_in_seki: false,
                komi_default: 7.5,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleSet::Chinese => "chinese",
            RuleSet::Japanese => "japanese",
            RuleSet::Aga => "aga",
            RuleSet::Ing => "ing",
            RuleSet::NewZealand => "new_zealand",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing an unknown rule set name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuleSet(pub String);

impl fmt::Display for UnknownRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown rule set '{}': expected chinese, japanese, aga, ing or new_zealand",
            self.0
        )
    }
}

impl std::error::Error for UnknownRuleSet {}

impl FromStr for RuleSet {
    type Err = UnknownRuleSet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chinese" => Ok(RuleSet::Chinese),
            "japanese" => Ok(RuleSet::Japanese),
            "aga" => Ok(RuleSet::Aga),
            "ing" => Ok(RuleSet::Ing),
            "new_zealand" | "new-zealand" | "nz" => Ok(RuleSet::NewZealand),
            _ => Err(UnknownRuleSet(s.to_string())),
        }
    }
}

/// Whether a rule set scores by area (stones + territory) or by territory
/// plus prisoners.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScoringKind {
    Area,
    Territory,
}

/// Superko flavor. Both flavors are enforced as whole-board position
/// repetition over a bounded window; the distinction is kept for rule-set
/// reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuperkoPolicy {
    Positional,
    Situational,
}

/// Static feature block for a rule set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RuleFeatures {
    pub scoring: ScoringKind,
    pub suicide_allowed: bool,
    pub superko: SuperkoPolicy,
    /// Stones handed over per pass (AGA/Japanese bookkeeping, caller-managed).
    pub pass_stones: u32,
    pub territory_in_seki: bool,
    pub komi_default: f64,
}

/// Result of a successfully executed move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovePlayed {
    /// Coordinates of all captured stones, in removal order.
    pub captured: Vec<Point>,
    /// Point protected by the ko rule for the opponent's next move, if any.
    pub ko_point: Option<Point>,
}

/// Snapshot of a group's tactical state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupReport {
    pub color: Color,
    pub size: usize,
    pub liberties: usize,
    pub in_atari: bool,
    /// Candidate eye points adjacent to the group (heuristic, see
    /// [`is_eye`]).
    pub eyes: Vec<Point>,
}

/// The rules engine: legality, execution, and superko history.
#[derive(Clone, Debug)]
pub struct Rules {
    rule_set: RuleSet,
    features: RuleFeatures,
    komi: f64,
    position_history: Vec<u32>,
}

impl Rules {
    /// Engine for `rule_set` with its conventional komi.
    pub fn new(rule_set: RuleSet) -> Self {
        Self::with_komi(rule_set, rule_set.default_komi())
    }

    /// Engine for `rule_set` with an explicit komi.
    pub fn with_komi(rule_set: RuleSet, komi: f64) -> Self {
        Self {
            rule_set,
            features: rule_set.features(),
            komi,
            position_history: Vec::new(),
        }
    }

    pub fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    pub fn features(&self) -> &RuleFeatures {
        &self.features
    }

    /// Recorded position hashes, oldest first.
    pub fn position_history(&self) -> &[u32] {
        &self.position_history
    }

    /// Forget all recorded positions (new game).
    pub fn clear_history(&mut self) {
        self.position_history.clear();
    }

    /// Decide whether `color` may play at `(x, y)`.
    ///
    /// `ko_point` is the point protected by the simple ko rule, as returned
    /// by the previous [`Rules::execute_move`]. Superko is checked against
    /// the recorded history.
    pub fn is_legal_move(
        &self,
        board: &Board,
        x: usize,
        y: usize,
        color: Color,
        ko_point: Option<Point>,
    ) -> MoveResult {
        self.check_move(board, x, y, color, ko_point, true)
    }

    /// Legality check with an explicit superko-history toggle.
    ///
    /// Captures are resolved on a simulated copy *before* the suicide check,
    /// since a capturing move may free liberties for the placing group.
    pub fn check_move(
        &self,
        board: &Board,
        x: usize,
        y: usize,
        color: Color,
        ko_point: Option<Point>,
        check_history: bool,
    ) -> MoveResult {
        if !board.in_bounds(x, y) {
            return MoveResult::OutOfBounds;
        }
        if !board.is_empty(x, y) {
            return MoveResult::Occupied;
        }
        if ko_point == Some((x, y)) {
            return MoveResult::Ko;
        }

        let mut test = board.clone();
        test.place_stone(x, y, color);
        let captured = resolve_captures(&mut test, x, y, color.opposite());

        if !self.features.suicide_allowed
            && captured.is_empty()
            && test.get_liberties(x, y) == 0
        {
            return MoveResult::Suicide;
        }

        if check_history {
            let hash = test.get_hash();
            let start = self.position_history.len().saturating_sub(SUPERKO_WINDOW);
            if self.position_history[start..].contains(&hash) {
                return MoveResult::Superko;
            }
        }

        MoveResult::Success
    }

    /// Execute a move on the authoritative board.
    ///
    /// Places the stone, removes every adjacent opponent group left without
    /// liberties, computes the new ko point, and records the resulting
    /// position hash. Returns `None` only if the placement itself fails
    /// (occupied/out of bounds), which after a successful
    /// [`Rules::is_legal_move`] is a caller contract violation.
    pub fn execute_move(
        &mut self,
        board: &mut Board,
        x: usize,
        y: usize,
        color: Color,
        move_number: u32,
    ) -> Option<MovePlayed> {
        if !board.place_stone_numbered(x, y, color, move_number) {
            return None;
        }

        let captured = resolve_captures(board, x, y, color.opposite());
        let ko_point = self.calculate_ko_point(board, x, y, &captured);

        self.position_history.push(board.get_hash());
        if self.position_history.len() > MAX_POSITION_HISTORY {
            let excess = self.position_history.len() - MAX_POSITION_HISTORY;
            self.position_history.drain(..excess);
        }

        Some(MovePlayed { captured, ko_point })
    }

    /// Ko point after a move at `(x, y)` that captured `captured`.
    ///
    /// A ko arises when exactly one stone was captured and the capturing
    /// stone stands alone with exactly one liberty; the captured point is
    /// then protected for one move.
    pub fn calculate_ko_point(
        &self,
        board: &mut Board,
        x: usize,
        y: usize,
        captured: &[Point],
    ) -> Option<Point> {
        if captured.len() != 1 {
            return None;
        }
        let group = board.get_group(x, y)?;
        if group.size() == 1 && group.liberty_count() == 1 {
            Some(captured[0])
        } else {
            None
        }
    }

    /// Tactical report for the group at `(x, y)`, or `None` for empty or
    /// out-of-bounds points.
    pub fn check_group_status(&self, board: &mut Board, x: usize, y: usize) -> Option<GroupReport> {
        let id = board.group_at(x, y)?;
        let group = board.group(id);
        let color = group.color;
        let size = group.size();
        let liberties = group.liberty_count();
        let stones: Vec<Point> = group.stones.iter().copied().collect();

        let mut eyes = Vec::new();
        let mut checked: BTreeSet<Point> = BTreeSet::new();
        for &(sx, sy) in &stones {
            for (nx, ny) in board.neighbors(sx, sy) {
                if !checked.insert((nx, ny)) {
                    continue;
                }
                if board.is_empty(nx, ny) && is_eye(board, nx, ny, color) {
                    eyes.push((nx, ny));
                }
            }
        }

        Some(GroupReport {
            color,
            size,
            liberties,
            in_atari: liberties == 1,
            eyes,
        })
    }

    /// All points where `color` can legally capture opponent stones,
    /// with the number of stones captured, largest captures first.
    ///
    /// Scans the whole board; O(size²) group queries, acceptable for
    /// boards up to 19×19.
    pub fn find_capturing_moves(&self, board: &mut Board, color: Color) -> Vec<(Point, usize)> {
        let opponent = color.opposite();
        let size = board.size();

        // opponent groups down to their last liberty
        let mut vulnerable: Vec<GroupId> = Vec::new();
        for y in 0..size {
            for x in 0..size {
                if board.get(x, y) != Some(opponent) {
                    continue;
                }
                let Some(id) = board.group_at(x, y) else {
                    continue;
                };
                if vulnerable.contains(&id) {
                    continue;
                }
                if board.group(id).in_atari() {
                    vulnerable.push(id);
                }
            }
        }

        let mut moves: Vec<(Point, usize)> = Vec::new();
        let mut checked_liberties: BTreeSet<Point> = BTreeSet::new();
        for id in vulnerable {
            let libs: Vec<Point> = board.group(id).liberties.iter().copied().collect();
            for (lx, ly) in libs {
                if !checked_liberties.insert((lx, ly)) {
                    continue;
                }
                if self.is_legal_move(board, lx, ly, color, None) != MoveResult::Success {
                    continue;
                }
                // total stones taken: every distinct adjacent opponent
                // group in atari falls to this move
                let mut gain = 0;
                let mut counted: Vec<GroupId> = Vec::new();
                for (nx, ny) in board.neighbors(lx, ly) {
                    if board.get(nx, ny) != Some(opponent) {
                        continue;
                    }
                    let Some(gid) = board.group_at(nx, ny) else {
                        continue;
                    };
                    if counted.contains(&gid) {
                        continue;
                    }
                    counted.push(gid);
                    let group = board.group(gid);
                    if group.in_atari() {
                        gain += group.size();
                    }
                }
                if gain > 0 {
                    moves.push(((lx, ly), gain));
                }
            }
        }

        moves.sort_by(|a, b| b.1.cmp(&a.1));
        moves
    }

    /// All points where `color` can put an opponent group into atari,
    /// with the threatened group's size, largest targets first.
    pub fn find_atari_moves(&self, board: &mut Board, color: Color) -> Vec<(Point, usize)> {
        let opponent = color.opposite();
        let size = board.size();
        let mut checked: Vec<GroupId> = Vec::new();
        let mut moves: Vec<(Point, usize)> = Vec::new();

        for y in 0..size {
            for x in 0..size {
                if board.get(x, y) != Some(opponent) {
                    continue;
                }
                let Some(id) = board.group_at(x, y) else {
                    continue;
                };
                if checked.contains(&id) {
                    continue;
                }
                checked.push(id);

                let group = board.group(id);
                if group.liberty_count() != 2 {
                    continue;
                }
                let libs: Vec<Point> = group.liberties.iter().copied().collect();
                let group_size = group.size();

                for (lx, ly) in libs {
                    if self.is_legal_move(board, lx, ly, color, None) != MoveResult::Success {
                        continue;
                    }
                    let mut test = board.clone();
                    test.place_stone(lx, ly, color);
                    if let Some(after) = test.get_group(x, y) {
                        if after.in_atari() {
                            moves.push(((lx, ly), group_size));
                        }
                    }
                }
            }
        }

        moves.sort_by(|a, b| b.1.cmp(&a.1));
        moves
    }
}

/// Remove every opponent group adjacent to the just-played stone at
/// `(x, y)` that has no liberties left. Returns the removed coordinates.
///
/// Adjacent points sharing a group are deduplicated by group handle; stone
/// sets are snapshotted before removal begins so later removals cannot
/// disturb the worklist.
fn resolve_captures(board: &mut Board, x: usize, y: usize, opponent: Color) -> Vec<Point> {
    let mut doomed: Vec<Vec<Point>> = Vec::new();
    let mut seen: Vec<GroupId> = Vec::new();

    for (nx, ny) in board.neighbors(x, y) {
        if board.get(nx, ny) != Some(opponent) {
            continue;
        }
        let Some(id) = board.group_at(nx, ny) else {
            continue;
        };
        if seen.contains(&id) {
            continue;
        }
        seen.push(id);
        let group = board.group(id);
        if group.liberty_count() == 0 {
            doomed.push(group.stones.iter().copied().collect());
        }
    }

    let mut removed = Vec::new();
    for stones in doomed {
        for (sx, sy) in stones {
            if board.remove_stone(sx, sy) {
                removed.push((sx, sy));
            }
        }
    }
    removed
}

/// Heuristic eye test for an empty point.
///
/// The point is a candidate eye for `color` when all four orthogonal
/// neighbors are `color` or off-board, and at least three of the four
/// diagonals are `color` or off-board (off-board diagonals count as
/// friendly). False eyes can pass this test; it is a local filter, not a
/// tactical life-and-death read.
pub fn is_eye(board: &Board, x: usize, y: usize, color: Color) -> bool {
    if !board.is_empty(x, y) {
        return false;
    }
    for (nx, ny) in board.neighbors(x, y) {
        if board.get(nx, ny) != Some(color) {
            return false;
        }
    }

    let mut diagonal_friends = 0;
    for (dx, dy) in [(-1isize, -1isize), (-1, 1), (1, -1), (1, 1)] {
        let nx = x as isize + dx;
        let ny = y as isize + dy;
        if nx < 0 || ny < 0 || !board.in_bounds(nx as usize, ny as usize) {
            diagonal_friends += 1;
        } else if board.get(nx as usize, ny as usize) == Some(color) {
            diagonal_friends += 1;
        }
    }
    diagonal_friends >= 3
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place stones directly, bypassing legality (test setup only).
    fn setup(board: &mut Board, black: &[Point], white: &[Point]) {
        for &(x, y) in black {
            assert!(board.place_stone(x, y, Color::Black));
        }
        for &(x, y) in white {
            assert!(board.place_stone(x, y, Color::White));
        }
    }

    #[test]
    fn test_bounds_and_occupancy() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        board.place_stone(4, 4, Color::Black);

        assert_eq!(
            rules.is_legal_move(&board, 9, 4, Color::White, None),
            MoveResult::OutOfBounds
        );
        assert_eq!(
            rules.is_legal_move(&board, 4, 4, Color::White, None),
            MoveResult::Occupied
        );
        assert_eq!(
            rules.is_legal_move(&board, 5, 5, Color::White, None),
            MoveResult::Success
        );
    }

    #[test]
    fn test_ko_point_blocks_move() {
        let board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        assert_eq!(
            rules.is_legal_move(&board, 3, 3, Color::Black, Some((3, 3))),
            MoveResult::Ko
        );
        assert_eq!(
            rules.is_legal_move(&board, 3, 3, Color::Black, Some((5, 5))),
            MoveResult::Success
        );
    }

    #[test]
    fn test_basic_capture() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        // white stone at (4,4) surrounded on three sides
        setup(&mut board, &[(3, 4), (5, 4), (4, 3)], &[(4, 4)]);

        let played = rules
            .execute_move(&mut board, 4, 5, Color::Black, 1)
            .unwrap();
        assert_eq!(played.captured, vec![(4, 4)]);
        assert_eq!(board.get(4, 4), None);
        assert_eq!(played.ko_point, None, "capturing group has 4 liberties");
    }

    #[test]
    fn test_capture_removes_whole_group() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        // two-stone white chain, fully surrounded except one liberty
        setup(
            &mut board,
            &[(3, 4), (3, 5), (4, 3), (4, 6), (5, 4)],
            &[(4, 4), (4, 5)],
        );

        let played = rules
            .execute_move(&mut board, 5, 5, Color::Black, 1)
            .unwrap();
        assert_eq!(played.captured.len(), 2);
        assert!(played.captured.contains(&(4, 4)));
        assert!(played.captured.contains(&(4, 5)));
        assert_eq!(board.get(4, 4), None);
        assert_eq!(board.get(4, 5), None);
    }

    #[test]
    fn test_group_with_liberty_survives() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        // white chain keeps an outside liberty at (4,6)
        setup(
            &mut board,
            &[(3, 4), (3, 5), (4, 3), (5, 4)],
            &[(4, 4), (4, 5)],
        );

        let played = rules
            .execute_move(&mut board, 5, 5, Color::Black, 1)
            .unwrap();
        assert!(played.captured.is_empty());
        assert_eq!(board.get(4, 4), Some(Color::White));
    }

    #[test]
    fn test_suicide_rejected() {
        let mut board = Board::new(9);
        // corner point with both neighbors white
        setup(&mut board, &[], &[(1, 0), (0, 1)]);

        for rule_set in [RuleSet::Chinese, RuleSet::Japanese, RuleSet::Aga] {
            let rules = Rules::new(rule_set);
            assert_eq!(
                rules.is_legal_move(&board, 0, 0, Color::Black, None),
                MoveResult::Suicide,
                "{rule_set}"
            );
        }
    }

    #[test]
    fn test_capture_is_not_suicide() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        // black filling (0,0) captures the white stone at (1,0) first
        setup(&mut board, &[(2, 0), (1, 1), (0, 1)], &[(1, 0)]);

        assert_eq!(
            rules.is_legal_move(&board, 0, 0, Color::Black, None),
            MoveResult::Success
        );
    }

    #[test]
    fn test_ko_detection_and_shape() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        // classic ko: black cup around (3,4), white cup around (4,4)
        setup(
            &mut board,
            &[(2, 4), (3, 3), (3, 5)],
            &[(3, 4), (4, 3), (4, 5), (5, 4)],
        );

        let played = rules
            .execute_move(&mut board, 4, 4, Color::Black, 1)
            .unwrap();
        assert_eq!(played.captured, vec![(3, 4)]);
        assert_eq!(played.ko_point, Some((3, 4)));

        // immediate recapture is forbidden
        assert_eq!(
            rules.is_legal_move(&board, 3, 4, Color::White, played.ko_point),
            MoveResult::Ko
        );
    }

    #[test]
    fn test_multi_stone_capture_sets_no_ko() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        setup(
            &mut board,
            &[(3, 4), (3, 5), (4, 3), (4, 6), (5, 4)],
            &[(4, 4), (4, 5)],
        );
        let played = rules
            .execute_move(&mut board, 5, 5, Color::Black, 1)
            .unwrap();
        assert_eq!(played.captured.len(), 2);
        assert_eq!(played.ko_point, None);
    }

    #[test]
    fn test_superko_rejects_repetition() {
        let mut board = Board::new(9);
        let mut rules = Rules::new(RuleSet::Chinese);
        setup(
            &mut board,
            &[(2, 4), (3, 3), (3, 5)],
            &[(3, 4), (4, 3), (4, 5), (5, 4)],
        );

        // black takes the ko
        let first = rules
            .execute_move(&mut board, 4, 4, Color::Black, 1)
            .unwrap();
        assert_eq!(first.ko_point, Some((3, 4)));

        // both sides play elsewhere; simple ko protection expires
        rules.execute_move(&mut board, 7, 7, Color::White, 2).unwrap();
        rules.execute_move(&mut board, 0, 0, Color::Black, 3).unwrap();

        // white retakes the ko (legal: the resulting position is new)
        assert_eq!(
            rules.is_legal_move(&board, 3, 4, Color::White, None),
            MoveResult::Success
        );
        let retake = rules
            .execute_move(&mut board, 3, 4, Color::White, 4)
            .unwrap();
        assert_eq!(retake.captured, vec![(4, 4)]);
        assert_eq!(retake.ko_point, Some((4, 4)));

        // black retaking again would recreate the position after move 3
        assert_eq!(
            rules.is_legal_move(&board, 4, 4, Color::Black, None),
            MoveResult::Superko
        );
        // with history checking off, only the simple ko rule applies
        assert_eq!(
            rules.check_move(&board, 4, 4, Color::Black, None, false),
            MoveResult::Success
        );
    }

    #[test]
    fn test_history_is_bounded() {
        let mut board = Board::new(19);
        let mut rules = Rules::new(RuleSet::Chinese);
        let mut n = 0;
        for y in 0..6 {
            for x in 0..10 {
                n += 1;
                let color = if n % 2 == 1 { Color::Black } else { Color::White };
                rules.execute_move(&mut board, x, y, color, n).unwrap();
            }
        }
        assert_eq!(rules.position_history().len(), MAX_POSITION_HISTORY);
    }

    #[test]
    fn test_eye_heuristic() {
        let mut board = Board::new(9);
        // black diamond around (4,4) with three friendly diagonals
        setup(
            &mut board,
            &[(4, 3), (4, 5), (3, 4), (5, 4), (3, 3), (3, 5), (5, 3)],
            &[],
        );
        assert!(is_eye(&board, 4, 4, Color::Black));
        assert!(!is_eye(&board, 4, 4, Color::White));
        // one hostile diagonal is tolerated in the center
        board.place_stone(5, 5, Color::White);
        assert!(is_eye(&board, 4, 4, Color::Black));
    }

    #[test]
    fn test_eye_needs_three_friendly_diagonals() {
        let mut board = Board::new(9);
        // orthogonals covered but only two diagonal supports
        setup(&mut board, &[(4, 3), (4, 5), (3, 4), (5, 4), (3, 3), (5, 5)], &[]);
        assert!(!is_eye(&board, 4, 4, Color::Black));
    }

    #[test]
    fn test_corner_eye_counts_edge_as_friendly() {
        let mut board = Board::new(9);
        setup(&mut board, &[(1, 0), (0, 1)], &[]);
        // (0,0): both orthogonal neighbors black, all diagonals off-board
        // except (1,1), which is empty -- three friendly diagonals
        assert!(is_eye(&board, 0, 0, Color::Black));
    }

    #[test]
    fn test_check_group_status() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        setup(&mut board, &[(4, 4), (4, 5)], &[(3, 4), (5, 4), (4, 3)]);

        let report = rules.check_group_status(&mut board, 4, 4).unwrap();
        assert_eq!(report.color, Color::Black);
        assert_eq!(report.size, 2);
        assert_eq!(report.liberties, 3);
        assert!(!report.in_atari);

        assert!(rules.check_group_status(&mut board, 8, 8).is_none());
    }

    #[test]
    fn test_find_capturing_moves() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        // white (4,4) in atari, last liberty at (4,5)
        setup(&mut board, &[(3, 4), (5, 4), (4, 3)], &[(4, 4)]);

        let moves = rules.find_capturing_moves(&mut board, Color::Black);
        assert_eq!(moves, vec![((4, 5), 1)]);

        // nothing for white to capture
        assert!(rules.find_capturing_moves(&mut board, Color::White).is_empty());
    }

    #[test]
    fn test_find_capturing_moves_prefers_bigger_capture() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        // one-stone group in atari at (0,0); two-stone group in atari at (6,0)-(7,0)
        setup(
            &mut board,
            &[(1, 0), (5, 0), (6, 1), (7, 1)],
            &[(0, 0), (6, 0), (7, 0)],
        );

        let moves = rules.find_capturing_moves(&mut board, Color::Black);
        assert_eq!(moves, vec![((8, 0), 2), ((0, 1), 1)], "largest capture first");
    }

    #[test]
    fn test_find_atari_moves() {
        let mut board = Board::new(9);
        let rules = Rules::new(RuleSet::Chinese);
        // white (4,4) with exactly two liberties at (4,5) and (5,4)
        setup(&mut board, &[(3, 4), (4, 3)], &[(4, 4)]);

        let moves = rules.find_atari_moves(&mut board, Color::Black);
        let points: Vec<Point> = moves.iter().map(|m| m.0).collect();
        assert!(points.contains(&(4, 5)));
        assert!(points.contains(&(5, 4)));
        assert!(moves.iter().all(|m| m.1 == 1));
    }

    #[test]
    fn test_rule_set_parsing() {
        assert_eq!("chinese".parse::<RuleSet>().unwrap(), RuleSet::Chinese);
        assert_eq!("NZ".parse::<RuleSet>().unwrap(), RuleSet::NewZealand);
        assert!("tromp-taylor".parse::<RuleSet>().is_err());
    }

    #[test]
    fn test_rule_features() {
        assert_eq!(RuleSet::Chinese.features().scoring, ScoringKind::Area);
        assert_eq!(RuleSet::Japanese.features().scoring, ScoringKind::Territory);
        assert_eq!(
            RuleSet::Japanese.features().superko,
            SuperkoPolicy::Situational
        );
        assert!(!RuleSet::Aga.features().suicide_allowed);
        assert_eq!(RuleSet::Ing.features().komi_default, 8.0);
        assert_eq!(RuleSet::Ing.features().scoring, ScoringKind::Area);
    }
}
