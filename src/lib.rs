//! Gomoku (five in a row) on a 15x15 board: rules, pattern analysis and a
//! one-ply heuristic AI, plus the terminal shell that plays it.

pub mod ai;
pub mod board;
pub mod cli;
pub mod game;
pub mod game_logger;
pub mod player;
pub mod rules;
pub mod scores;
pub mod shapes;
pub mod terminal_ui;

pub use ai::{decide_move, AIEngine, Decision, Difficulty, Reason};
pub use board::{Board, Cell, Move, Pos, BOARD_SIZE};
pub use game::{GameState, PlayError};
pub use player::Role;
pub use rules::{has_five, is_draw, Outcome};
