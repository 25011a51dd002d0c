//! Line-shape classification for a single cell.
//!
//! For each of the four orientations the contiguous run of `role` stones through
//! the cell is measured, together with whether the cell just past each end of
//! the run is empty. The shape of that run is one of the tiers below; the cell's
//! `Patterns` is the union over all four orientations.

use crate::board::{Board, Cell};
use crate::player::Role;
use crate::rules::DIRECTIONS;

/// Tiers from strongest to weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
  Five,
  LiveFour,
  RushFour,
  LiveThree,
  SleepThree,
  LiveTwo,
}

impl Shape {
  pub const ALL: [Shape; 6] = [
    Shape::Five,
    Shape::LiveFour,
    Shape::RushFour,
    Shape::LiveThree,
    Shape::SleepThree,
    Shape::LiveTwo,
  ];

  /// First matching rule wins; runs of one, dead runs and single-open twos have no tier.
  pub fn classify(count: usize, open_ends: usize) -> Option<Shape> {
    match (count, open_ends) {
      (c, _) if c >= 5 => Some(Shape::Five),
      (4, 2) => Some(Shape::LiveFour),
      (4, 1) => Some(Shape::RushFour),
      (3, 2) => Some(Shape::LiveThree),
      (3, 1) => Some(Shape::SleepThree),
      (2, 2) => Some(Shape::LiveTwo),
      _ => None,
    }
  }

  /// Five, live four or rush four: shapes that win or must be answered at once.
  pub fn is_critical(&self) -> bool {
    matches!(self, Shape::Five | Shape::LiveFour | Shape::RushFour)
  }
}

/// Run length and open ends of one orientation through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
  pub count: usize,
  pub open_ends: usize,
}

impl LineScan {
  pub fn shape(&self) -> Option<Shape> {
    Shape::classify(self.count, self.open_ends)
  }
}

/// Scan along (dr, dc) and its reverse. The cell itself always counts as one
/// `role` stone, whatever the board holds there. An end is open only when the
/// first cell past the run is on the board and empty.
pub fn scan_line(board: &Board, row: usize, col: usize, dr: isize, dc: isize, role: Role) -> LineScan {
  let mut count = 1;
  let mut open_ends = 0;

  for (sr, sc) in [(dr, dc), (-dr, -dc)] {
    let mut r = row as isize + sr;
    let mut c = col as isize + sc;
    while Board::in_bounds(r, c) && board.get(r, c) == Cell::Stone(role) {
      count += 1;
      r += sr;
      c += sc;
    }
    if Board::in_bounds(r, c) && board.get(r, c) == Cell::Empty {
      open_ends += 1;
    }
  }

  LineScan { count, open_ends }
}

/// Which tiers appear in at least one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Patterns {
  pub five: bool,
  pub live_four: bool,
  pub rush_four: bool,
  pub live_three: bool,
  pub sleep_three: bool,
  pub live_two: bool,
}

impl Patterns {
  pub fn insert(&mut self, shape: Shape) {
    match shape {
      Shape::Five => self.five = true,
      Shape::LiveFour => self.live_four = true,
      Shape::RushFour => self.rush_four = true,
      Shape::LiveThree => self.live_three = true,
      Shape::SleepThree => self.sleep_three = true,
      Shape::LiveTwo => self.live_two = true,
    }
  }

  pub fn contains(&self, shape: Shape) -> bool {
    match shape {
      Shape::Five => self.five,
      Shape::LiveFour => self.live_four,
      Shape::RushFour => self.rush_four,
      Shape::LiveThree => self.live_three,
      Shape::SleepThree => self.sleep_three,
      Shape::LiveTwo => self.live_two,
    }
  }

  pub fn strongest(&self) -> Option<Shape> {
    Shape::ALL.into_iter().find(|&s| self.contains(s))
  }

  pub fn is_empty(&self) -> bool {
    self.strongest().is_none()
  }
}

/// Classify every orientation through (row, col) for `role`. Intended to be
/// called on a board where `role` has just (hypothetically) played there.
pub fn analyze(board: &Board, row: usize, col: usize, role: Role) -> Patterns {
  let mut patterns = Patterns::default();
  for &(dr, dc) in &DIRECTIONS {
    if let Some(shape) = scan_line(board, row, col, dr, dc, role).shape() {
      patterns.insert(shape);
    }
  }
  patterns
}

/// Patterns `role` would own after playing (row, col). The input board is not touched.
pub fn analyze_move(board: &Board, row: usize, col: usize, role: Role) -> Patterns {
  let hypothetical = board.place(row, col, role);
  analyze(&hypothetical, row, col, role)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rules::has_five;

  fn stones(cells: &[(usize, usize)], role: Role) -> Board {
    cells.iter().fold(Board::new(), |b, &(r, c)| b.place(r, c, role))
  }

  #[test]
  fn test_classify_table() {
    assert_eq!(Shape::classify(5, 0), Some(Shape::Five));
    assert_eq!(Shape::classify(7, 2), Some(Shape::Five));
    assert_eq!(Shape::classify(4, 2), Some(Shape::LiveFour));
    assert_eq!(Shape::classify(4, 1), Some(Shape::RushFour));
    assert_eq!(Shape::classify(4, 0), None);
    assert_eq!(Shape::classify(3, 2), Some(Shape::LiveThree));
    assert_eq!(Shape::classify(3, 1), Some(Shape::SleepThree));
    assert_eq!(Shape::classify(2, 2), Some(Shape::LiveTwo));
    assert_eq!(Shape::classify(2, 1), None);
    assert_eq!(Shape::classify(1, 2), None);
  }

  #[test]
  fn test_open_four_is_live_four_not_five() {
    let board = stones(&[(7, 4), (7, 5), (7, 6), (7, 7)], Role::Black);
    let p = analyze(&board, 7, 5, Role::Black);
    assert!(p.live_four);
    assert!(!p.five);
    assert!(!has_five(&board, 7, 5, Role::Black));
  }

  #[test]
  fn test_edge_blocks_an_end() {
    let board = stones(&[(0, 0), (0, 1), (0, 2), (0, 3)], Role::White);
    let p = analyze(&board, 0, 3, Role::White);
    assert_eq!(p.strongest(), Some(Shape::RushFour));
  }

  #[test]
  fn test_opponent_blocks_an_end() {
    let board = stones(&[(5, 5), (6, 6), (7, 7)], Role::Black).place(8, 8, Role::White);
    let p = analyze(&board, 6, 6, Role::Black);
    assert!(p.sleep_three);
    assert!(!p.live_three);
  }

  #[test]
  fn test_dead_four_has_no_tier() {
    let board = stones(&[(3, 2), (3, 3), (3, 4), (3, 5)], Role::Black)
      .place(3, 1, Role::White)
      .place(3, 6, Role::White);
    assert!(analyze(&board, 3, 3, Role::Black).is_empty());
  }

  #[test]
  fn test_union_across_orientations() {
    // Horizontal live three and vertical live two through (7, 7).
    let board = stones(&[(7, 6), (7, 7), (7, 8), (6, 7)], Role::Black);
    let p = analyze(&board, 7, 7, Role::Black);
    assert!(p.live_three);
    assert!(p.live_two);
    assert_eq!(p.strongest(), Some(Shape::LiveThree));
  }

  #[test]
  fn test_analyze_move_is_hypothetical() {
    let board = stones(&[(7, 4), (7, 5), (7, 6), (7, 7)], Role::Black);
    let before = board;
    let p = analyze_move(&board, 7, 8, Role::Black);
    assert!(p.five);
    assert_eq!(board, before);
    assert!(board.is_valid_move(7, 8));
  }

  #[test]
  fn test_patterns_insert_and_contains() {
    let mut p = Patterns::default();
    assert!(p.is_empty());
    for shape in Shape::ALL {
      assert!(!p.contains(shape));
      p.insert(shape);
      assert!(p.contains(shape));
    }
    assert_eq!(p.strongest(), Some(Shape::Five));
  }

  #[test]
  fn test_is_critical() {
    assert!(Shape::Five.is_critical());
    assert!(Shape::RushFour.is_critical());
    assert!(!Shape::LiveThree.is_critical());
  }
}
