//! Group enumeration and liberty checks built on [`flood_fill`].

use crate::board::{Board, Cell, Color, Point};
use crate::flood::{Group, flood_fill};

/// The group containing the stone at `point`.
///
/// Returns an empty group when `point` is empty or off the board.
pub fn group_of(board: &Board, point: Point) -> Group {
    match board.get(point) {
        Some(cell) if !cell.is_empty() => flood_fill(board, point, cell),
        _ => Group::new(),
    }
}

/// Enemy groups touching `point`, from the point of view of `moving`.
///
/// A neighbor already covered by a group found from an earlier neighbor is
/// skipped, so each enemy group appears at most once.
pub fn adjacent_enemy_groups(board: &Board, point: Point, moving: Color) -> Vec<Group> {
    let enemy = Cell::from(moving.opp());
    let mut groups: Vec<Group> = Vec::new();

    for n in board.neighbors(point) {
        if board.get(n) != Some(enemy) || groups.iter().any(|g| g.contains(&n)) {
            continue;
        }
        groups.push(flood_fill(board, n, enemy));
    }
    groups
}

/// True iff no stone of `group` has an empty in-bounds neighbor.
///
/// An empty group is vacuously captured.
pub fn is_captured(board: &Board, group: &Group) -> bool {
    group
        .iter()
        .all(|&pt| board.neighbors(pt).all(|n| board.get(n) != Some(Cell::Empty)))
}

/// Capture check for the group holding the stone at `point`.
///
/// Only meaningful on an occupied point; an empty point yields an empty
/// group and therefore `true`.
pub fn is_captured_at(board: &Board, point: Point) -> bool {
    is_captured(board, &group_of(board, point))
}
