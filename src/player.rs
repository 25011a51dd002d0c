use crate::ai::Difficulty;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
  Human,
  AI,
}

// Color of the stone. "No player" is expressed as `Option<Role>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
  Black, // moves first
  White,
}

impl Role {
  // Get the opponent's role
  pub fn opponent(&self) -> Role {
    match self {
      Role::Black => Role::White,
      Role::White => Role::Black,
    }
  }

  /// Board glyph used by the terminal view and the decision log.
  pub fn symbol(&self) -> char {
    match self {
      Role::Black => 'X',
      Role::White => 'O',
    }
  }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Role::Black => write!(f, "Black"),
      Role::White => write!(f, "White"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
  pub player_type: PlayerType,
  pub role: Role,

  // Only read when player_type is AI
  pub difficulty: Difficulty,
}

impl Player {
  pub fn human(role: Role) -> Self {
    Self {
      player_type: PlayerType::Human,
      role,
      difficulty: Difficulty::Medium,
    }
  }

  pub fn ai(role: Role, difficulty: Difficulty) -> Self {
    Self {
      player_type: PlayerType::AI,
      role,
      difficulty,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_opponent_is_involution() {
    assert_eq!(Role::Black.opponent(), Role::White);
    assert_eq!(Role::White.opponent(), Role::Black);
    assert_eq!(Role::Black.opponent().opponent(), Role::Black);
  }

  #[test]
  fn test_constructors() {
    let p = Player::ai(Role::White, Difficulty::Hard);
    assert_eq!(p.player_type, PlayerType::AI);
    assert_eq!(p.difficulty, Difficulty::Hard);
    assert_eq!(Player::human(Role::Black).player_type, PlayerType::Human);
  }
}
