use crate::board::Board;
use crate::player::Role;
use crate::shapes::{analyze_move, Patterns, Shape};

#[rustfmt::skip]
pub mod score {
  pub const FIVE: i64        = 1_000_000;
  pub const LIVE_FOUR: i64   = 500_000;
  pub const RUSH_FOUR: i64   = 10_000;
  pub const LIVE_THREE: i64  = 5_000;
  pub const SLEEP_THREE: i64 = 500;
  pub const LIVE_TWO: i64    = 100;
  pub const BASELINE: i64    = 10;
}

// Defense is weighted 6/5 = 1.2 over offense. Every table entry is a multiple
// of 5, so the weighted score stays an exact integer. Empirically tuned.
const DEFENSE_WEIGHT_NUM: i64 = 6;
const DEFENSE_WEIGHT_DEN: i64 = 5;

pub struct Scores;

impl Scores {
  pub fn get(shape: Shape) -> i64 {
    match shape {
      Shape::Five => score::FIVE,
      Shape::LiveFour => score::LIVE_FOUR,
      Shape::RushFour => score::RUSH_FOUR,
      Shape::LiveThree => score::LIVE_THREE,
      Shape::SleepThree => score::SLEEP_THREE,
      Shape::LiveTwo => score::LIVE_TWO,
    }
  }

  /// Score of the strongest tier present, or the baseline when there is none.
  pub fn of(patterns: &Patterns) -> i64 {
    patterns.strongest().map_or(score::BASELINE, Self::get)
  }
}

/// Desirability of (row, col) for `role`: what `role` gains by playing there,
/// plus 1.2x what the opponent would gain by taking it instead.
pub fn evaluate(board: &Board, row: usize, col: usize, role: Role) -> i64 {
  let offense = Scores::of(&analyze_move(board, row, col, role));
  let defense = Scores::of(&analyze_move(board, row, col, role.opponent()));
  offense + defense * DEFENSE_WEIGHT_NUM / DEFENSE_WEIGHT_DEN
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_table_is_strictly_ordered() {
    let values: Vec<i64> = Shape::ALL.iter().map(|&s| Scores::get(s)).collect();
    assert!(values.windows(2).all(|w| w[0] > w[1]));
    assert!(Scores::get(Shape::LiveTwo) > score::BASELINE);
  }

  #[test]
  fn test_isolated_cell_scores_baseline_both_ways() {
    let board = Board::new();
    // 10 + 10 * 1.2
    assert_eq!(evaluate(&board, 7, 7, Role::Black), 22);
  }

  #[test]
  fn test_defense_outweighs_equal_offense() {
    // Black has a live two at (7,7)-(7,8); White has an equal one at (2,2)-(2,3).
    let board = Board::new()
      .place(7, 7, Role::Black)
      .place(7, 8, Role::Black)
      .place(2, 2, Role::White)
      .place(2, 3, Role::White);
    // For Black, (7, 9) extends its own two into a live three.
    let attack = evaluate(&board, 7, 9, Role::Black);
    // For Black, (2, 4) stops White's live three.
    let defend = evaluate(&board, 2, 4, Role::Black);
    assert_eq!(attack, score::LIVE_THREE + score::BASELINE * 6 / 5);
    assert_eq!(defend, score::BASELINE + score::LIVE_THREE * 6 / 5);
    assert!(defend > attack);
  }

  #[test]
  fn test_evaluate_leaves_board_untouched() {
    let board = Board::new().place(7, 7, Role::Black);
    let before = board;
    evaluate(&board, 7, 8, Role::White);
    assert_eq!(board, before);
  }

  #[test]
  fn test_completing_five_dominates() {
    let board = (3..7).fold(Board::new(), |b, c| b.place(7, c, Role::White));
    assert!(evaluate(&board, 7, 7, Role::White) >= score::FIVE);
    // Blocking the same cell for Black is worth 1.2x a five.
    assert_eq!(evaluate(&board, 7, 7, Role::Black), score::BASELINE + score::FIVE * 6 / 5);
  }
}
