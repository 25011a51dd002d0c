use crate::ai::{Candidate, Decision};
use crate::board::{Board, Pos};
use crate::game::describe;
use crate::player::{Player, Role};
use crate::rules::Outcome;
use crate::scores::{evaluate, Scores};
use crate::shapes::{analyze_move, Shape};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Human-readable record of every AI decision in a headless game.
pub struct GameLogger<W: Write = BufWriter<File>> {
  out: W,
}

impl GameLogger {
  pub fn new<P: AsRef<Path>>(filename: P) -> io::Result<Self> {
    let file = File::create(filename)?;
    Ok(Self::from_writer(BufWriter::new(file)))
  }
}

impl<W: Write> GameLogger<W> {
  pub fn from_writer(out: W) -> Self {
    Self { out }
  }

  pub fn into_inner(self) -> W {
    self.out
  }

  pub fn log_game_start(&mut self, black: Player, white: Player) -> io::Result<()> {
    writeln!(self.out, "Gomoku AI vs AI")?;
    writeln!(self.out, "  {} (X): {:?}", black.role, black.difficulty)?;
    writeln!(self.out, "  {} (O): {:?}", white.role, white.difficulty)
  }

  pub fn log_move_start(&mut self, role: Role, round: usize) -> io::Result<()> {
    writeln!(
      self.out,
      "\n{}\nMove #{} - Player: {} ({})\n{}",
      "=".repeat(80),
      round,
      role,
      role.symbol(),
      "=".repeat(80)
    )
  }

  pub fn log_board_state(&mut self, board: &Board) -> io::Result<()> {
    writeln!(self.out, "\nCurrent board state:")?;
    writeln!(self.out, "{}", board)
  }

  pub fn log_candidates(&mut self, candidates: &[Candidate]) -> io::Result<()> {
    writeln!(self.out, "\nRanked candidates ({}):", candidates.len())?;
    for (rank, c) in candidates.iter().enumerate() {
      writeln!(self.out, "  {:2}. ({:2},{:2})  score={}", rank + 1, c.pos.0, c.pos.1, c.score)?;
    }
    Ok(())
  }

  pub fn log_patterns(&mut self, pos: Pos, role: Role, board: &Board) -> io::Result<()> {
    let (row, col) = pos;
    writeln!(self.out, "\nPattern analysis for position ({}, {}):", row, col)?;

    let mine = analyze_move(board, row, col, role);
    let theirs = analyze_move(board, row, col, role.opponent());
    writeln!(self.out, "  My shapes: {:?} ({})", shapes(&mine), Scores::of(&mine))?;
    writeln!(self.out, "  Opponent shapes: {:?} ({})", shapes(&theirs), Scores::of(&theirs))?;
    writeln!(self.out, "  Combined score: {}", evaluate(board, row, col, role))?;

    match theirs.strongest() {
      Some(Shape::Five) => writeln!(self.out, "  THREAT LEVEL: CRITICAL - Opponent completes FIVE here!")?,
      Some(Shape::LiveFour) => writeln!(self.out, "  THREAT LEVEL: HIGH - Opponent gets an open FOUR here!")?,
      Some(Shape::RushFour) => writeln!(self.out, "  THREAT LEVEL: MEDIUM - Opponent gets a closed FOUR here")?,
      Some(Shape::LiveThree) => writeln!(self.out, "  THREAT LEVEL: LOW - Opponent gets an open THREE here")?,
      _ => {}
    }
    Ok(())
  }

  pub fn log_final_decision(&mut self, decision: Option<Decision>) -> io::Result<()> {
    writeln!(self.out, "\n*** FINAL DECISION ***")?;
    match decision {
      Some(d) => {
        writeln!(self.out, "  Chosen move: ({}, {})", d.pos.0, d.pos.1)?;
        writeln!(self.out, "  Score: {}", d.score)?;
        writeln!(self.out, "  Reason: {}", describe(d.reason))?;
      }
      None => writeln!(self.out, "  No valid moves found")?,
    }
    self.out.flush()
  }

  pub fn log_game_end(&mut self, outcome: Option<Outcome>, total_moves: usize) -> io::Result<()> {
    writeln!(self.out, "\n\n{}", "=".repeat(80))?;
    writeln!(self.out, "GAME OVER")?;
    writeln!(self.out, "{}", "=".repeat(80))?;

    match outcome {
      Some(Outcome::Win(role)) => writeln!(self.out, "Result: {} ({}) WINS!", role.to_string().to_uppercase(), role.symbol())?,
      Some(Outcome::Draw) => writeln!(self.out, "Result: DRAW")?,
      None => writeln!(self.out, "Result: UNFINISHED")?,
    }

    writeln!(self.out, "Total moves: {}", total_moves)?;
    writeln!(self.out, "{}\n", "=".repeat(80))?;
    self.out.flush()
  }
}

fn shapes(patterns: &crate::shapes::Patterns) -> Vec<Shape> {
  Shape::ALL.into_iter().filter(|&s| patterns.contains(s)).collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ai::Reason;

  fn text(logger: GameLogger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner()).unwrap()
  }

  #[test]
  fn test_logs_decision_and_threat() {
    let board = (4..8).fold(Board::new(), |b, c| b.place(7, c, Role::Black));
    let mut logger = GameLogger::from_writer(Vec::new());
    logger.log_patterns((7, 8), Role::White, &board).unwrap();
    logger
      .log_final_decision(Some(Decision {
        pos: (7, 8),
        score: 1_000_000,
        reason: Reason::Block(Shape::Five),
      }))
      .unwrap();
    let out = text(logger);
    assert!(out.contains("THREAT LEVEL: CRITICAL"));
    assert!(out.contains("Chosen move: (7, 8)"));
    assert!(out.contains("Critical defense against Five"));
  }

  #[test]
  fn test_logs_candidates_and_result() {
    let mut logger = GameLogger::from_writer(Vec::new());
    logger
      .log_candidates(&[Candidate { pos: (6, 7), score: 130 }, Candidate { pos: (6, 8), score: 130 }])
      .unwrap();
    logger.log_game_end(Some(Outcome::Win(Role::White)), 31).unwrap();
    let out = text(logger);
    assert!(out.contains("Ranked candidates (2)"));
    assert!(out.contains(" 1. ( 6, 7)  score=130"));
    assert!(out.contains("Result: WHITE (O) WINS!"));
    assert!(out.contains("Total moves: 31"));
  }

  #[test]
  fn test_logs_draw_and_board() {
    let mut logger = GameLogger::from_writer(Vec::new());
    logger.log_move_start(Role::Black, 1).unwrap();
    logger.log_board_state(&Board::new().place(7, 7, Role::Black)).unwrap();
    logger.log_game_end(Some(Outcome::Draw), 225).unwrap();
    let out = text(logger);
    assert!(out.contains("Move #1 - Player: Black (X)"));
    assert!(out.contains(" X "));
    assert!(out.contains("Result: DRAW"));
  }
}
