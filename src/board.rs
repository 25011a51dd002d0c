use crate::player::Role;
use std::fmt;

pub const BOARD_SIZE: usize = 15;

/// (row, col) on the board, both in `0..BOARD_SIZE`.
pub type Pos = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
  #[default]
  Empty,
  Stone(Role),
}

impl Cell {
  pub fn is_empty(&self) -> bool {
    matches!(self, Cell::Empty)
  }
}

/// A single placement, as recorded in the game history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
  pub row: usize,
  pub col: usize,
  pub role: Role,
}

impl Move {
  pub fn new(row: usize, col: usize, role: Role) -> Self {
    Self { row, col, role }
  }

  pub fn pos(&self) -> Pos {
    (self.row, self.col)
  }
}

/// Fixed 15x15 grid. `Board` is `Copy`: every placement returns a new value and
/// never touches the board it was derived from, so hypothetical boards are free
/// to build and throw away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
  cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
  fn default() -> Self {
    Self::new()
  }
}

impl Board {
  // Create an empty board
  pub fn new() -> Self {
    Self {
      cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
    }
  }

  /// Replay `moves` in order onto an empty board. Invalid entries are skipped
  /// the same way `place` skips them.
  pub fn from_moves(moves: &[Move]) -> Self {
    moves.iter().fold(Self::new(), |board, m| board.place(m.row, m.col, m.role))
  }

  /// Geometric center, (7, 7) on a 15x15 board.
  pub fn center() -> Pos {
    (BOARD_SIZE / 2, BOARD_SIZE / 2)
  }

  pub fn in_bounds(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
  }

  /// Bounds-safe read: anything off the grid reads as `Empty`.
  pub fn get(&self, row: isize, col: isize) -> Cell {
    if Self::in_bounds(row, col) {
      self.cells[row as usize][col as usize]
    } else {
      Cell::Empty
    }
  }

  pub fn cell(&self, row: usize, col: usize) -> Cell {
    if row < BOARD_SIZE && col < BOARD_SIZE {
      self.cells[row][col]
    } else {
      Cell::Empty
    }
  }

  pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE && self.cells[row][col].is_empty()
  }

  /// Returns a copy with `role` at (row, col). An invalid move yields an
  /// unchanged copy; callers wanting a visible failure check `is_valid_move` first.
  pub fn place(&self, row: usize, col: usize, role: Role) -> Board {
    let mut next = *self;
    if self.is_valid_move(row, col) {
      next.cells[row][col] = Cell::Stone(role);
    }
    next
  }

  pub fn is_full(&self) -> bool {
    self.cells.iter().all(|row| row.iter().all(|c| !c.is_empty()))
  }

  pub fn is_empty(&self) -> bool {
    self.stone_count() == 0
  }

  pub fn stone_count(&self) -> usize {
    self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
  }

  /// All empty coordinates in row-major order.
  pub fn empty_cells(&self) -> Vec<Pos> {
    let mut cells = Vec::new();
    for i in 0..BOARD_SIZE {
      for j in 0..BOARD_SIZE {
        if self.cells[i][j].is_empty() {
          cells.push((i, j));
        }
      }
    }
    cells
  }

  fn window(row: usize, col: usize, radius: usize) -> impl Iterator<Item = Pos> {
    let r0 = row.saturating_sub(radius);
    let r1 = (row + radius).min(BOARD_SIZE - 1);
    let c0 = col.saturating_sub(radius);
    let c1 = (col + radius).min(BOARD_SIZE - 1);
    (r0..=r1).flat_map(move |i| (c0..=c1).map(move |j| (i, j))).filter(move |&p| p != (row, col))
  }

  /// Empty cells inside the square window of `radius` around (row, col),
  /// clipped to the board, center excluded.
  pub fn neighbors_within(&self, row: usize, col: usize, radius: usize) -> Vec<Pos> {
    Self::window(row, col, radius).filter(|&(i, j)| self.cells[i][j].is_empty()).collect()
  }

  /// Whether any stone sits inside the same window `neighbors_within` scans.
  pub fn has_stone_within(&self, row: usize, col: usize, radius: usize) -> bool {
    Self::window(row, col, radius).any(|(i, j)| !self.cells[i][j].is_empty())
  }
}

impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "   ")?;
    for j in 0..BOARD_SIZE {
      write!(f, "{:2} ", j)?;
    }
    writeln!(f)?;
    for i in 0..BOARD_SIZE {
      write!(f, "{:2} ", i)?;
      for j in 0..BOARD_SIZE {
        let ch = match self.cells[i][j] {
          Cell::Empty => '.',
          Cell::Stone(role) => role.symbol(),
        };
        write!(f, " {} ", ch)?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().len(), BOARD_SIZE * BOARD_SIZE);
  }

  #[test]
  fn test_center() {
    assert_eq!(Board::center(), (7, 7));
  }

  #[test]
  fn test_out_of_range_is_never_valid() {
    let board = Board::new();
    for k in 0..BOARD_SIZE {
      assert!(!board.is_valid_move(BOARD_SIZE, k));
      assert!(!board.is_valid_move(k, BOARD_SIZE));
    }
    assert!(!board.is_valid_move(usize::MAX, 0));
    assert!(!board.is_valid_move(0, usize::MAX));
    assert!(board.is_valid_move(0, 0));
    assert!(board.is_valid_move(14, 14));
  }

  #[test]
  fn test_out_of_range_reads_as_empty() {
    let board = Board::new().place(0, 0, Role::Black);
    assert_eq!(board.get(0, 0), Cell::Stone(Role::Black));
    assert_eq!(board.get(-1, 0), Cell::Empty);
    assert_eq!(board.get(0, -1), Cell::Empty);
    assert_eq!(board.get(15, 3), Cell::Empty);
    assert_eq!(board.cell(99, 99), Cell::Empty);
  }

  #[test]
  fn test_place_does_not_mutate_source() {
    let board = Board::new().place(3, 4, Role::White);
    let before = board;
    let after = board.place(5, 5, Role::Black);
    assert_eq!(board, before);
    assert_eq!(after.cell(5, 5), Cell::Stone(Role::Black));
    assert_eq!(board.cell(5, 5), Cell::Empty);
  }

  #[test]
  fn test_place_on_occupied_is_noop() {
    let board = Board::new().place(7, 7, Role::Black);
    assert_eq!(board.place(7, 7, Role::White), board);
    assert_eq!(board.place(15, 0, Role::White), board);
  }

  #[test]
  fn test_empty_cells_row_major() {
    let board = Board::new().place(0, 0, Role::Black).place(0, 2, Role::White);
    let cells = board.empty_cells();
    assert_eq!(cells[0], (0, 1));
    assert_eq!(cells[1], (0, 3));
    assert_eq!(cells.len(), BOARD_SIZE * BOARD_SIZE - 2);
  }

  #[test]
  fn test_neighbors_within_clips_and_excludes_center() {
    let board = Board::new().place(1, 1, Role::Black);
    let around_corner = board.neighbors_within(0, 0, 1);
    assert_eq!(around_corner, vec![(0, 1), (1, 0)]);

    let mid = Board::new().neighbors_within(7, 7, 2);
    assert_eq!(mid.len(), 24);
    assert!(!mid.contains(&(7, 7)));
  }

  #[test]
  fn test_has_stone_within() {
    let board = Board::new().place(7, 7, Role::Black);
    assert!(board.has_stone_within(9, 9, 2));
    assert!(!board.has_stone_within(9, 9, 1));
    assert!(!board.has_stone_within(7, 7, 3));
  }

  #[test]
  fn test_full_board() {
    let mut board = Board::new();
    for (i, j) in Board::new().empty_cells() {
      board = board.place(i, j, if (i + j) % 2 == 0 { Role::Black } else { Role::White });
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
    assert_eq!(board.stone_count(), BOARD_SIZE * BOARD_SIZE);
  }

  #[test]
  fn test_from_moves_replays_in_order() {
    let moves = [
      Move::new(7, 7, Role::Black),
      Move::new(7, 8, Role::White),
      Move::new(7, 7, Role::White), // occupied, skipped
    ];
    let board = Board::from_moves(&moves);
    assert_eq!(board.cell(7, 7), Cell::Stone(Role::Black));
    assert_eq!(board.cell(7, 8), Cell::Stone(Role::White));
    assert_eq!(board.stone_count(), 2);
  }

  #[test]
  fn test_display_marks_stones() {
    let text = Board::new().place(0, 0, Role::Black).place(0, 1, Role::White).to_string();
    let first_row = text.lines().nth(1).unwrap_or_default();
    assert!(first_row.starts_with(" 0  X  O  . "));
  }
}
