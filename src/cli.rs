use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Game mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameModeArg {
  /// Human vs Human
  HumanHuman,
  /// Human vs AI
  HumanAi,
  /// AI vs AI
  AiAi,
}

/// AI strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
  /// Random pick among the three best moves
  Easy,
  Medium,
  Hard,
}

/// Stone color
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
  Black,
  White,
}

/// Gomoku on a 15x15 board against a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "gomoku", version)]
pub struct CliArgs {
  /// Game mode
  #[arg(long, value_enum, default_value_t = GameModeArg::HumanAi)]
  pub mode: GameModeArg,

  /// AI difficulty
  #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
  pub difficulty: DifficultyArg,

  /// Color the AI plays in human-ai mode (Black moves first)
  #[arg(long, value_enum, default_value_t = ColorArg::White)]
  pub ai_color: ColorArg,

  /// Seed for the AI's random choices
  #[arg(long)]
  pub seed: Option<u64>,

  /// Where application logs are written
  #[arg(long, default_value = "gomoku.log")]
  pub log_file: PathBuf,

  /// Play ai-ai without the board UI and write a per-move decision log
  #[arg(long)]
  pub headless: bool,
}
