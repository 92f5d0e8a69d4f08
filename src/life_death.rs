//! Heuristic life-and-death estimation.
//!
//! Classifies groups as alive, dead, unsettled or seki from liberty counts,
//! eye shapes and rough eye-space estimates. Everything here is advisory:
//! there is no search-based life-and-death reading, and disagreement with a
//! rigorous solver is expected. The output feeds dead-stone suggestions for
//! scoring; the user (or a stronger analyzer) has the final word.

use std::collections::BTreeSet;

use crate::board::{Board, Color, GroupId, Point};

/// Estimated life status of a group.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GroupStatus {
    Alive,
    Dead,
    Unsettled,
    Seki,
}

/// Heuristic group-status analyzer over a snapshot of a board.
pub struct DeadStoneAnalyzer {
    board: Board,
}

impl DeadStoneAnalyzer {
    /// Snapshot `board` for analysis.
    pub fn new(board: &Board) -> Self {
        Self {
            board: board.clone(),
        }
    }

    /// Classify every group on the board.
    pub fn analyze_all_groups(&mut self) -> Vec<(GroupId, GroupStatus)> {
        let ids = self.board.get_all_groups();
        ids.into_iter()
            .map(|id| (id, self.analyze_group(id)))
            .collect()
    }

    /// Access a group by the handle returned from
    /// [`DeadStoneAnalyzer::analyze_all_groups`].
    pub fn group(&self, id: GroupId) -> &crate::board::Group {
        self.board.group(id)
    }

    /// Classify a single group.
    ///
    /// Decision ladder: no liberties is dead; two real eyes (or one real eye
    /// with four liberties) is alive; escape potential or enough eye space
    /// leaves the group unsettled; otherwise liberty count decides.
    pub fn analyze_group(&self, id: GroupId) -> GroupStatus {
        let liberties = self.board.group(id).liberty_count();
        if liberties == 0 {
            return GroupStatus::Dead;
        }

        if liberties >= 2 {
            let eyes = self.count_real_eyes(id);
            if eyes >= 2 {
                return GroupStatus::Alive;
            }
            if eyes == 1 && liberties >= 4 {
                return GroupStatus::Alive;
            }
        }

        if self.can_escape(id) {
            return GroupStatus::Unsettled;
        }
        if self.can_make_eyes(id) {
            return GroupStatus::Unsettled;
        }

        if liberties >= 5 {
            GroupStatus::Alive
        } else if liberties <= 1 {
            GroupStatus::Dead
        } else {
            GroupStatus::Unsettled
        }
    }

    /// Stones worth proposing as dead: every stone of a dead group, plus
    /// unsettled groups down to their last liberty.
    pub fn find_dead_stones(&mut self) -> BTreeSet<Point> {
        let statuses = self.analyze_all_groups();
        let mut dead = BTreeSet::new();
        for (id, status) in statuses {
            let group = self.board.group(id);
            let condemned = match status {
                GroupStatus::Dead => true,
                GroupStatus::Unsettled => group.liberty_count() <= 1,
                _ => false,
            };
            if condemned {
                dead.extend(group.stones.iter().copied());
            }
        }
        dead
    }

    /// Mutual-life regions: for each opposite-color pair of groups sharing
    /// at least two liberties, the pair is seki when neither color can
    /// occupy any shared liberty without the placed group ending up with
    /// zero liberties. One-ply simulation only; very conservative.
    pub fn analyze_seki(&mut self) -> Vec<BTreeSet<Point>> {
        let ids = self.board.get_all_groups();
        let mut regions = Vec::new();
        for i in 0..ids.len() {
            for j in (i + 1)..ids.len() {
                let (a, b) = (ids[i], ids[j]);
                if self.board.group(a).color == self.board.group(b).color {
                    continue;
                }
                if self.is_seki(a, b) {
                    let ga = self.board.group(a);
                    let gb = self.board.group(b);
                    let mut region: BTreeSet<Point> =
                        ga.stones.union(&gb.stones).copied().collect();
                    region.extend(ga.liberties.intersection(&gb.liberties).copied());
                    regions.push(region);
                }
            }
        }
        regions
    }

    fn is_seki(&self, a: GroupId, b: GroupId) -> bool {
        let ga = self.board.group(a);
        let gb = self.board.group(b);
        let shared: Vec<Point> = ga.liberties.intersection(&gb.liberties).copied().collect();
        if shared.len() < 2 {
            return false;
        }
        for &(x, y) in &shared {
            for color in [Color::Black, Color::White] {
                let mut test = self.board.clone();
                test.place_stone(x, y, color);
                if let Some(group) = test.get_group(x, y) {
                    if group.liberty_count() > 0 {
                        // this color occupies the point safely
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Real eyes adjacent to the group: candidate eye points whose occupied
    /// orthogonal neighbors all belong to this group (rejects eyes shared
    /// with other groups at this coarse level).
    fn count_real_eyes(&self, id: GroupId) -> usize {
        let group = self.board.group(id);
        let color = group.color;
        let stones = group.stones.clone();

        let mut checked: BTreeSet<Point> = BTreeSet::new();
        let mut eyes = 0;
        for &(sx, sy) in &stones {
            for (nx, ny) in self.board.neighbors(sx, sy) {
                if !checked.insert((nx, ny)) {
                    continue;
                }
                if !self.board.is_empty(nx, ny) {
                    continue;
                }
                if self.is_eye_shape(nx, ny, color) && self.is_real_eye(nx, ny, &stones) {
                    eyes += 1;
                }
            }
        }
        eyes
    }

    /// Local eye-shape test: in-bounds orthogonal neighbors all friendly;
    /// diagonal support of at least 3 of 4 in the center, or all but one
    /// where the edge trims the diagonals.
    fn is_eye_shape(&self, x: usize, y: usize, color: Color) -> bool {
        if !self.board.is_empty(x, y) {
            return false;
        }
        for (nx, ny) in self.board.neighbors(x, y) {
            if self.board.get(nx, ny) != Some(color) {
                return false;
            }
        }

        let mut friendly = 0;
        let mut total = 0;
        for (dx, dy) in [(-1isize, -1isize), (-1, 1), (1, -1), (1, 1)] {
            let nx = x as isize + dx;
            let ny = y as isize + dy;
            if nx < 0 || ny < 0 || !self.board.in_bounds(nx as usize, ny as usize) {
                continue;
            }
            total += 1;
            if self.board.get(nx as usize, ny as usize) == Some(color) {
                friendly += 1;
            }
        }
        if total == 4 {
            friendly >= 3
        } else {
            friendly + 1 >= total
        }
    }

    fn is_real_eye(&self, x: usize, y: usize, stones: &BTreeSet<Point>) -> bool {
        for (nx, ny) in self.board.neighbors(x, y) {
            if !self.board.is_empty(nx, ny) && !stones.contains(&(nx, ny)) {
                return false;
            }
        }
        true
    }

    /// Escape potential: big groups with breathing room can run; small
    /// groups pinned low on the edge cannot.
    fn can_escape(&self, id: GroupId) -> bool {
        let group = self.board.group(id);
        let liberties = group.liberty_count();
        if group.size() >= 4 && liberties >= 3 {
            return true;
        }

        let (min_x, max_x, min_y, max_y) = bounding_box(&group.stones);
        let n = self.board.size();
        let edge_distance = min_x
            .min(min_y)
            .min(n - 1 - max_x)
            .min(n - 1 - max_y);
        if edge_distance == 0 && liberties <= 2 {
            return false;
        }
        liberties >= 3
    }

    /// Whether the group plausibly has room for two eyes.
    fn can_make_eyes(&self, id: GroupId) -> bool {
        self.internal_space(id) >= 6
    }

    /// Empty points inside the group's bounding box that are surrounded by
    /// the group (at least 3 of 4 orthogonal neighbors are its stones).
    fn internal_space(&self, id: GroupId) -> usize {
        let group = self.board.group(id);
        if group.size() < 4 {
            return 0;
        }
        let (min_x, max_x, min_y, max_y) = bounding_box(&group.stones);

        let mut internal = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if !self.board.is_empty(x, y) {
                    continue;
                }
                let surrounding = self
                    .board
                    .neighbors(x, y)
                    .into_iter()
                    .filter(|p| group.stones.contains(p))
                    .count();
                if surrounding >= 3 {
                    internal += 1;
                }
            }
        }
        internal
    }
}

fn bounding_box(stones: &BTreeSet<Point>) -> (usize, usize, usize, usize) {
    let min_x = stones.iter().map(|p| p.0).min().unwrap_or(0);
    let max_x = stones.iter().map(|p| p.0).max().unwrap_or(0);
    let min_y = stones.iter().map(|p| p.1).min().unwrap_or(0);
    let max_y = stones.iter().map(|p| p.1).max().unwrap_or(0);
    (min_x, max_x, min_y, max_y)
}
