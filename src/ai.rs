use crate::board::{Board, Pos};
use crate::player::Role;
use crate::scores::{evaluate, score, Scores};
use crate::shapes::{analyze_move, Shape};
use log::debug;
use rand::Rng;

/// Neighborhood scanned for win/block threats.
const CRITICAL_RADIUS: usize = 2;
/// Stones on the board up to which the opening book is consulted.
const OPENING_BOOK_STONES: usize = 4;
/// Up to this many stones, candidates only need a stone within radius 1.
const NARROW_SEARCH_STONES: usize = 8;
/// Manhattan radius around the center used when no cell is near a stone.
const FALLBACK_DISTANCE: usize = 5;
/// Size of the pool `Easy` picks from at random.
const EASY_POOL: usize = 3;

/// Cells tried by the opening book once the center is taken, relative to it:
/// up, down, left, right, then the diagonals.
const OPENING_OFFSETS: [(isize, isize); 8] = [(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  /// How many ranked candidates survive into the final choice.
  pub fn candidate_cap(&self) -> usize {
    match self {
      Difficulty::Easy => 8,
      Difficulty::Medium => 12,
      Difficulty::Hard => 20,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
  pub pos: Pos,
  pub score: i64,
}

/// Which step of the decision procedure produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
  Opening,
  Win(Shape),
  Block(Shape),
  OpeningBook,
  Ranked,
  Randomized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
  pub pos: Pos,
  pub score: i64,
  pub reason: Reason,
}

/// One-ply heuristic move selector. Holds no state between calls besides its
/// difficulty; every decision is a function of the board passed in (and of the
/// random source, for `Easy`).
#[derive(Debug, Clone, Copy)]
pub struct AIEngine {
  pub difficulty: Difficulty,
}

impl AIEngine {
  pub fn new(difficulty: Difficulty) -> Self {
    Self { difficulty }
  }

  pub fn decide_move(&self, board: &Board, role: Role) -> Option<Pos> {
    self.decide_move_with(board, role, &mut rand::thread_rng())
  }

  pub fn decide_move_with<R: Rng + ?Sized>(&self, board: &Board, role: Role, rng: &mut R) -> Option<Pos> {
    self.decide(board, role, rng).map(|d| d.pos)
  }

  pub fn decide<R: Rng + ?Sized>(&self, board: &Board, role: Role, rng: &mut R) -> Option<Decision> {
    let decision = self.decide_inner(board, role, rng);
    match &decision {
      Some(d) => debug!("{:?} AI ({:?}) -> {:?} score={} via {:?}", role, self.difficulty, d.pos, d.score, d.reason),
      None => debug!("{:?} AI ({:?}) has no move", role, self.difficulty),
    }
    decision
  }

  fn decide_inner<R: Rng + ?Sized>(&self, board: &Board, role: Role, rng: &mut R) -> Option<Decision> {
    let stones = board.stone_count();

    // 1) Empty board: always the center
    if stones == 0 {
      return Some(Decision {
        pos: Board::center(),
        score: score::BASELINE,
        reason: Reason::Opening,
      });
    }

    // 2) Our own five / four
    if let Some((pos, shape)) = find_critical_move(board, role) {
      return Some(Decision {
        pos,
        score: Scores::get(shape),
        reason: Reason::Win(shape),
      });
    }

    // 3) Opponent's five / open four. A rush four alone falls through.
    if let Some((pos, shape)) = find_critical_move(board, role.opponent()) {
      if Scores::get(shape) >= score::LIVE_FOUR {
        return Some(Decision {
          pos,
          score: Scores::get(shape),
          reason: Reason::Block(shape),
        });
      }
    }

    // 4) Opening book
    if stones <= OPENING_BOOK_STONES {
      if let Some(pos) = opening_move(board) {
        return Some(Decision {
          pos,
          score: score::BASELINE,
          reason: Reason::OpeningBook,
        });
      }
    }

    // 5) Ranked candidates
    let candidates = rank_candidates(board, role, self.difficulty.candidate_cap());

    // 6) Easy picks among the top few
    if self.difficulty == Difficulty::Easy && candidates.len() > 1 {
      let pool = &candidates[..EASY_POOL.min(candidates.len())];
      let pick = pool[rng.gen_range(0..pool.len())];
      return Some(Decision {
        pos: pick.pos,
        score: pick.score,
        reason: Reason::Randomized,
      });
    }

    // 7) Best candidate, or none on a full board
    candidates.first().map(|c| Decision {
      pos: c.pos,
      score: c.score,
      reason: Reason::Ranked,
    })
  }
}

/// Entry point for callers that don't manage their own random source.
pub fn decide_move(board: &Board, difficulty: Difficulty, ai_role: Role) -> Option<Pos> {
  AIEngine::new(difficulty).decide_move(board, ai_role)
}

/// Strongest critical shape `role` can reach in one move, among empty cells
/// with a stone within radius 2. Five beats live four beats rush four; within a
/// tier the first cell in row-major order wins.
pub fn find_critical_move(board: &Board, role: Role) -> Option<(Pos, Shape)> {
  let mut best: Option<(Pos, Shape)> = None;

  for (i, j) in board.empty_cells() {
    if !board.has_stone_within(i, j, CRITICAL_RADIUS) {
      continue;
    }
    let shape = match analyze_move(board, i, j, role).strongest() {
      Some(shape) if shape.is_critical() => shape,
      _ => continue,
    };
    if shape == Shape::Five {
      return Some(((i, j), shape));
    }
    // Shape orders strongest first
    if best.map_or(true, |(_, b)| shape < b) {
      best = Some(((i, j), shape));
    }
  }

  best
}

/// Center if free, otherwise the first free cell adjacent to it in book order.
pub fn opening_move(board: &Board) -> Option<Pos> {
  let (cr, cc) = Board::center();
  if board.is_valid_move(cr, cc) {
    return Some((cr, cc));
  }
  OPENING_OFFSETS
    .iter()
    .map(|&(dr, dc)| (cr as isize + dr, cc as isize + dc))
    .filter(|&(r, c)| Board::in_bounds(r, c))
    .map(|(r, c)| (r as usize, c as usize))
    .find(|&(r, c)| board.is_valid_move(r, c))
}

/// Score every candidate cell for `role` and keep the best `cap`, highest
/// first. Equal scores keep row-major order.
pub fn rank_candidates(board: &Board, role: Role, cap: usize) -> Vec<Candidate> {
  let radius = if board.stone_count() <= NARROW_SEARCH_STONES { 1 } else { 2 };
  let empty = board.empty_cells();

  let mut cells: Vec<Pos> = empty
    .iter()
    .copied()
    .filter(|&(i, j)| board.has_stone_within(i, j, radius))
    .collect();

  if cells.is_empty() {
    let (cr, cc) = Board::center();
    cells = empty
      .into_iter()
      .filter(|&(i, j)| i.abs_diff(cr) + j.abs_diff(cc) <= FALLBACK_DISTANCE)
      .collect();
  }

  let mut candidates: Vec<Candidate> = cells
    .into_iter()
    .map(|(i, j)| Candidate {
      pos: (i, j),
      score: evaluate(board, i, j, role),
    })
    .collect();

  // sort_by is stable
  candidates.sort_by(|a, b| b.score.cmp(&a.score));
  candidates.truncate(cap);
  candidates
}
