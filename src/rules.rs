//! Win and draw detection, always evaluated through the cell just played.

use crate::board::{Board, Cell, Move, Pos};
use crate::player::Role;

/// Stones in an unbroken line needed to win.
pub const WIN_COUNT: usize = 5;

/// Line orientations as (row_delta, col_delta): horizontal, vertical,
/// main diagonal, anti-diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Win(Role),
  Draw,
}

impl Outcome {
  /// `None` for a draw.
  pub fn winner(&self) -> Option<Role> {
    match self {
      Outcome::Win(role) => Some(*role),
      Outcome::Draw => None,
    }
  }
}

/// Count `role` stones stepping from (row, col) along (dr, dc), excluding the start cell.
pub fn count_direction(board: &Board, row: usize, col: usize, dr: isize, dc: isize, role: Role) -> usize {
  let mut count = 0;
  let mut r = row as isize + dr;
  let mut c = col as isize + dc;
  while board.get(r, c) == Cell::Stone(role) {
    count += 1;
    r += dr;
    c += dc;
  }
  count
}

/// Length of the run through (row, col) along one orientation, counting the cell itself.
pub fn line_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize, role: Role) -> usize {
  1 + count_direction(board, row, col, dr, dc, role) + count_direction(board, row, col, -dr, -dc, role)
}

pub fn has_five(board: &Board, row: usize, col: usize, role: Role) -> bool {
  DIRECTIONS
    .iter()
    .any(|&(dr, dc)| line_length(board, row, col, dr, dc, role) >= WIN_COUNT)
}

/// A draw is a full board; callers check `has_five` first.
pub fn is_draw(board: &Board) -> bool {
  board.is_full()
}

/// Cells of the first winning run through (row, col), ordered from one end to the other.
pub fn winning_line(board: &Board, row: usize, col: usize, role: Role) -> Option<Vec<Pos>> {
  for &(dr, dc) in &DIRECTIONS {
    if line_length(board, row, col, dr, dc, role) < WIN_COUNT {
      continue;
    }
    let back = count_direction(board, row, col, -dr, -dc, role) as isize;
    let forward = count_direction(board, row, col, dr, dc, role) as isize;
    let line = (-back..=forward)
      .map(|k| ((row as isize + k * dr) as usize, (col as isize + k * dc) as usize))
      .collect();
    return Some(line);
  }
  None
}

/// Result of the game right after `mv` was applied to `board`, if it ended.
/// A full board that also holds a new five is a win, not a draw.
pub fn outcome_after(board: &Board, mv: &Move) -> Option<Outcome> {
  if has_five(board, mv.row, mv.col, mv.role) {
    Some(Outcome::Win(mv.role))
  } else if is_draw(board) {
    Some(Outcome::Draw)
  } else {
    None
  }
}
