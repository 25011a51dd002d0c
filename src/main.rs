use clap::Parser;
use gomoku_ai::ai::Difficulty;
use gomoku_ai::cli::{CliArgs, ColorArg, DifficultyArg, GameModeArg};
use gomoku_ai::game::{Game, GameMode};
use gomoku_ai::game_logger::GameLogger;
use gomoku_ai::player::{Player, Role};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io;

fn main() -> io::Result<()> {
  // 1) Parse command line arguments
  let args = CliArgs::parse();

  // 2) Convert args to core enums
  let mode = match args.mode {
    GameModeArg::HumanHuman => GameMode::HumanvHuman,
    GameModeArg::HumanAi => GameMode::AIvHuman,
    GameModeArg::AiAi => GameMode::AIvAI,
  };
  let difficulty = match args.difficulty {
    DifficultyArg::Easy => Difficulty::Easy,
    DifficultyArg::Medium => Difficulty::Medium,
    DifficultyArg::Hard => Difficulty::Hard,
  };
  let ai_role = match args.ai_color {
    ColorArg::Black => Role::Black,
    ColorArg::White => Role::White,
  };

  if args.headless && mode != GameMode::AIvAI {
    return Err(io::Error::new(io::ErrorKind::InvalidInput, "--headless requires --mode ai-ai"));
  }

  // 3) Logging backend: the board UI owns the terminal, so interactive runs log to a file
  if args.headless {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  } else {
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(&args.log_file)?)
      .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
  }

  // 4) Define players. player1 always plays Black.
  let (player1, player2) = match mode {
    GameMode::HumanvHuman => (Player::human(Role::Black), Player::human(Role::White)),
    GameMode::AIvHuman => {
      let ai = Player::ai(ai_role, difficulty);
      let human = Player::human(ai_role.opponent());
      if ai_role == Role::Black {
        (ai, human)
      } else {
        (human, ai)
      }
    }
    GameMode::AIvAI => (Player::ai(Role::Black, difficulty), Player::ai(Role::White, difficulty)),
  };

  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };
  info!("Starting {:?} game, difficulty {:?}, seed {:?}", mode, difficulty, args.seed);

  // 5) Create and run the game
  let mut game = Game::new(mode, player1, player2, rng);
  if args.headless {
    let mut logger = GameLogger::new(&args.log_file)?;
    println!("Decision log: {}", args.log_file.display());
    let outcome = game.run_headless(&mut logger)?;
    println!("Result: {:?} after {} moves", outcome, game.state.move_count());
    Ok(())
  } else {
    game.run()
  }
}
