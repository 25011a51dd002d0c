use crate::ai::{rank_candidates, AIEngine, Reason};
use crate::board::{Board, Move, Pos, BOARD_SIZE};
use crate::game_logger::GameLogger;
use crate::player::{Player, PlayerType, Role};
use crate::rules::{outcome_after, winning_line, Outcome};
use crate::terminal_ui::{GameAction, TerminalUI};
use log::{info, warn};
use rand::rngs::StdRng;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
  AIvAI,
  AIvHuman,
  HumanvHuman,
}

/// Why a placement was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
  #[error("the game is already over")]
  GameOver,
  #[error("({0}, {1}) is off the board")]
  OutOfBounds(usize, usize),
  #[error("({0}, {1}) is already occupied")]
  Occupied(usize, usize),
}

/// Turn-taking state of one game. The side to move is always derived from the
/// history, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
  pub board: Board,
  pub history: Vec<Move>,
  /// Color played by the AI in a human-vs-AI game.
  pub ai_role: Option<Role>,
  pub outcome: Option<Outcome>,
}

impl GameState {
  pub fn new(ai_role: Option<Role>) -> Self {
    Self {
      board: Board::new(),
      history: Vec::new(),
      ai_role,
      outcome: None,
    }
  }

  /// Opponent of the last mover; Black on an empty history.
  pub fn current_role(&self) -> Role {
    self.history.last().map_or(Role::Black, |m| m.role.opponent())
  }

  pub fn is_over(&self) -> bool {
    self.outcome.is_some()
  }

  pub fn is_ai_turn(&self) -> bool {
    !self.is_over() && self.ai_role == Some(self.current_role())
  }

  pub fn last_move(&self) -> Option<Move> {
    self.history.last().copied()
  }

  pub fn move_count(&self) -> usize {
    self.history.len()
  }

  /// Place a stone for the side to move and report whether that ended the game.
  pub fn play(&mut self, row: usize, col: usize) -> Result<Option<Outcome>, PlayError> {
    if self.is_over() {
      return Err(PlayError::GameOver);
    }
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
      return Err(PlayError::OutOfBounds(row, col));
    }
    if !self.board.is_valid_move(row, col) {
      return Err(PlayError::Occupied(row, col));
    }

    let mv = Move::new(row, col, self.current_role());
    self.board = self.board.place(row, col, mv.role);
    self.history.push(mv);
    self.outcome = outcome_after(&self.board, &mv);
    if let Some(outcome) = self.outcome {
      info!("Game over after {} moves: {:?}", self.history.len(), outcome);
    }
    Ok(self.outcome)
  }

  /// Drop the last move, whoever made it.
  pub fn undo_last(&mut self) -> bool {
    if self.history.pop().is_none() {
      return false;
    }
    self.board = Board::from_moves(&self.history);
    self.outcome = None;
    true
  }

  /// Moves `undo_turn` would take back: the human's move and the AI reply, or
  /// only the AI's opening move when it plays Black. One move without an AI side.
  fn undo_steps(&self) -> usize {
    match self.ai_role {
      None => 1,
      Some(Role::Black) if self.history.len() == 1 => 1,
      Some(_) => 2,
    }
  }

  pub fn can_undo(&self) -> bool {
    !self.is_over() && !self.history.is_empty() && self.history.len() >= self.undo_steps()
  }

  /// Take back a full turn so the human is to move again. Refused once the game is over.
  pub fn undo_turn(&mut self) -> bool {
    if !self.can_undo() {
      return false;
    }
    let steps = self.undo_steps();
    self.history.truncate(self.history.len() - steps);
    self.board = Board::from_moves(&self.history);
    self.outcome = None;
    info!("Undid {} move(s), {} to play", steps, self.current_role());
    true
  }

  pub fn winning_line(&self) -> Option<Vec<Pos>> {
    match (self.outcome, self.last_move()) {
      (Some(Outcome::Win(role)), Some(m)) => winning_line(&self.board, m.row, m.col, role),
      _ => None,
    }
  }

  /// Status line for a human playing `human_role` against the AI.
  pub fn status_text(&self, human_role: Role) -> &'static str {
    match self.outcome {
      Some(Outcome::Draw) => "Draw",
      Some(Outcome::Win(role)) if role == human_role => "You win!",
      Some(Outcome::Win(_)) => "AI wins",
      None if self.current_role() == human_role => "Your turn",
      None => "AI is thinking...",
    }
  }
}

pub struct Game {
  pub state: GameState,
  pub mode: GameMode,

  pub player1: Player,
  pub player2: Player,

  pub ai1: AIEngine,
  pub ai2: AIEngine,
  pub rng: StdRng,

  // Current position "cursor" for human move
  pub cursor_row: usize,
  pub cursor_col: usize,

  // UI
  pub ui: TerminalUI,
}

impl Game {
  pub fn new(mode: GameMode, p1: Player, p2: Player, rng: StdRng) -> Self {
    let ai_role = match mode {
      GameMode::AIvHuman => [p1, p2].iter().find(|p| p.player_type == PlayerType::AI).map(|p| p.role),
      _ => None,
    };
    let (center_row, center_col) = Board::center();

    Self {
      state: GameState::new(ai_role),
      mode,
      player1: p1,
      player2: p2,
      ai1: AIEngine::new(p1.difficulty),
      ai2: AIEngine::new(p2.difficulty),
      rng,
      cursor_row: center_row,
      cursor_col: center_col,
      ui: TerminalUI::new(),
    }
  }

  fn player_for(&self, role: Role) -> Player {
    if self.player1.role == role {
      self.player1
    } else {
      self.player2
    }
  }

  fn engine_for(&self, role: Role) -> AIEngine {
    if self.player1.role == role {
      self.ai1
    } else {
      self.ai2
    }
  }

  pub fn run(&mut self) -> io::Result<()> {
    self.ui.init_screen()?;
    let result = self.event_loop();
    // Restore the terminal even if the loop failed
    self.ui.restore_terminal()?;
    result
  }

  fn event_loop(&mut self) -> io::Result<()> {
    let mut paused = false;

    loop {
      let role = self.state.current_role();
      let player = self.player_for(role);
      let highlight = self.state.winning_line().unwrap_or_default();

      self.ui.draw_board(
        &self.state.board,
        (self.cursor_row, self.cursor_col),
        self.state.last_move().map(|m| m.pos()),
        &highlight,
      )?;

      if paused || self.state.is_over() {
        let action = self.ui.read_input()?;
        if self.state.is_over() {
          break;
        }
        match action {
          GameAction::Quit => break,
          GameAction::TogglePause => paused = false,
          _ => {}
        }
        continue;
      }

      match player.player_type {
        PlayerType::AI => {
          info!("AI is making a move");
          self.ai_turn(role);
        }
        PlayerType::Human => match self.ui.read_input()? {
          GameAction::TogglePause => paused = true,
          GameAction::Quit => break,
          GameAction::Undo => {
            let undone = match self.mode {
              GameMode::HumanvHuman => self.state.undo_last(),
              _ => self.state.undo_turn(),
            };
            if !undone {
              self.ui.show_message("No moves to undo.");
            }
          }
          GameAction::MoveLeft => self.cursor_col = self.cursor_col.saturating_sub(1),
          GameAction::MoveRight => self.cursor_col = (self.cursor_col + 1).min(BOARD_SIZE - 1),
          GameAction::MoveUp => self.cursor_row = self.cursor_row.saturating_sub(1),
          GameAction::MoveDown => self.cursor_row = (self.cursor_row + 1).min(BOARD_SIZE - 1),
          GameAction::PlaceStone => {
            info!("Human is placing a stone");
            self.human_turn();
          }
          GameAction::None => {}
        },
      }

      if let Some(outcome) = self.state.outcome {
        self.print_winner(outcome);
      }
    }
    Ok(())
  }

  fn human_turn(&mut self) {
    if let Err(e) = self.state.play(self.cursor_row, self.cursor_col) {
      warn!("Rejected move: {}", e);
      self.ui.show_message(&e.to_string());
    } else if self.mode == GameMode::AIvHuman {
      let status = self.state.status_text(self.state.current_role().opponent());
      self.ui.show_message(status);
    }
  }

  fn ai_turn(&mut self, role: Role) {
    let engine = self.engine_for(role);
    let decision = engine.decide(&self.state.board, role, &mut self.rng);
    match decision {
      Some(d) => {
        let msg = format!("AI ({}) played {:?}, score={}", role, d.pos, d.score);
        self.ui.show_message(&msg);
        info!("AI moved to {:?} ({:?})", d.pos, d.reason);
        if let Err(e) = self.state.play(d.pos.0, d.pos.1) {
          warn!("AI chose an illegal move: {}", e);
        }
      }
      None => {
        // Only possible on a full board, which already ended the game
        self.ui.show_message("AI chose no move");
      }
    }
  }

  fn print_winner(&mut self, outcome: Outcome) {
    match (self.mode, outcome) {
      (_, Outcome::Draw) => self.ui.show_message("Game over. Draw!"),
      (GameMode::AIvHuman, Outcome::Win(role)) if self.player_for(role).player_type == PlayerType::Human => {
        self.ui.show_message("You win!")
      }
      (_, Outcome::Win(role)) => self.ui.show_message(&format!("{} ({}) wins!", role, role.symbol())),
    }
  }

  /// AI vs AI without a terminal UI; every decision goes to `logger`.
  pub fn run_headless<W: Write>(&mut self, logger: &mut GameLogger<W>) -> io::Result<Option<Outcome>> {
    if self.player1.player_type != PlayerType::AI || self.player2.player_type != PlayerType::AI {
      return Err(io::Error::new(io::ErrorKind::InvalidInput, "headless mode needs two AI players"));
    }

    logger.log_game_start(self.player1, self.player2)?;

    while !self.state.is_over() {
      let role = self.state.current_role();
      let round = self.state.move_count() + 1;
      let engine = self.engine_for(role);

      logger.log_move_start(role, round)?;
      logger.log_board_state(&self.state.board)?;

      let candidates = rank_candidates(&self.state.board, role, engine.difficulty.candidate_cap());
      logger.log_candidates(&candidates)?;

      let decision = engine.decide(&self.state.board, role, &mut self.rng);
      let Some(d) = decision else {
        logger.log_final_decision(None)?;
        break;
      };

      logger.log_patterns(d.pos, role, &self.state.board)?;
      logger.log_final_decision(Some(d))?;
      println!("Move #{} {} -> ({}, {}) score={} [{}]", round, role, d.pos.0, d.pos.1, d.score, describe(d.reason));

      if let Err(e) = self.state.play(d.pos.0, d.pos.1) {
        warn!("AI chose an illegal move: {}", e);
        break;
      }
    }

    logger.log_board_state(&self.state.board)?;
    logger.log_game_end(self.state.outcome, self.state.move_count())?;
    Ok(self.state.outcome)
  }
}

/// Human-readable label for the rule that produced a move.
pub fn describe(reason: Reason) -> String {
  match reason {
    Reason::Opening => "Center opening".to_string(),
    Reason::Win(shape) => format!("Winning move ({:?})", shape),
    Reason::Block(shape) => format!("Critical defense against {:?}", shape),
    Reason::OpeningBook => "Opening book".to_string(),
    Reason::Ranked => "Best heuristic score".to_string(),
    Reason::Randomized => "Random pick among top candidates".to_string(),
  }
}
