//! Connected-component search over the board grid.
//!
//! Uses an explicit work stack, so a fully filled 19x19 board costs at most
//! 361 stack entries on the heap rather than 361 nested calls.

use std::collections::BTreeSet;

use crate::board::{Board, Cell, Point};

/// A set of points connected through 4-directional adjacency.
pub type Group = BTreeSet<Point>;

/// Collect every point reachable from `start` through cells equal to `target`.
///
/// Returns an empty set when `start` is off the board or does not itself hold
/// `target`. `target` may be [`Cell::Empty`] to collect empty regions.
pub fn flood_fill(board: &Board, start: Point, target: Cell) -> Group {
    let mut group = Group::new();
    if board.get(start) != Some(target) {
        return group;
    }

    let size = board.size();
    let mut visited = vec![false; size * size];
    let mut stack = vec![start];
    visited[start.0 * size + start.1] = true;

    while let Some(pt) = stack.pop() {
        group.insert(pt);
        for n in board.neighbors(pt) {
            let ni = n.0 * size + n.1;
            if !visited[ni] && board.get(n) == Some(target) {
                visited[ni] = true;
                stack.push(n);
            }
        }
    }
    group
}
