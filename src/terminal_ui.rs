use crossterm::{
  cursor::{Hide, MoveTo, Show},
  event::{read, Event, KeyCode, KeyEvent, KeyEventKind},
  execute, queue,
  style::{Color, Print, ResetColor, SetForegroundColor},
  terminal::{disable_raw_mode, enable_raw_mode, size, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::board::{Board, Cell, Pos, BOARD_SIZE};
use std::io::{stdout, Result as IoResult, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
  None,
  Quit,
  TogglePause,
  Undo,
  MoveLeft,
  MoveRight,
  MoveUp,
  MoveDown,
  PlaceStone,
}

impl GameAction {
  /// Key bindings: arrows move, Enter/Space place, Backspace undoes, P pauses, Esc/Q quits.
  pub fn from_key(code: KeyCode) -> GameAction {
    match code {
      KeyCode::Esc | KeyCode::Char('q') => GameAction::Quit,
      KeyCode::Char('p') => GameAction::TogglePause,
      KeyCode::Backspace => GameAction::Undo,
      KeyCode::Left => GameAction::MoveLeft,
      KeyCode::Right => GameAction::MoveRight,
      KeyCode::Up => GameAction::MoveUp,
      KeyCode::Down => GameAction::MoveDown,
      KeyCode::Enter | KeyCode::Char(' ') => GameAction::PlaceStone,
      _ => GameAction::None,
    }
  }
}

pub struct TerminalUI {
  /// Last message, redrawn on the bottom line after every board refresh.
  last_message: String,
}

impl Default for TerminalUI {
  fn default() -> Self {
    Self::new()
  }
}

impl TerminalUI {
  /// "Light green" for the cursor
  const CURSOR_COLOR: Color = Color::Rgb { r: 120, g: 255, b: 120 };
  /// "Light red" for the last stone
  const LAST_STONE_COLOR: Color = Color::Rgb { r: 255, g: 140, b: 140 };
  /// Gold for the winning five
  const WIN_LINE_COLOR: Color = Color::Rgb { r: 255, g: 215, b: 0 };

  const CELL_WIDTH: u16 = 3;

  pub fn new() -> Self {
    Self {
      last_message: String::new(),
    }
  }

  pub fn init_screen(&mut self) -> IoResult<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
  }

  pub fn restore_terminal(&mut self) -> IoResult<()> {
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
  }

  /// Block until a key press and map it to an action.
  pub fn read_input(&mut self) -> IoResult<GameAction> {
    match read()? {
      // Windows reports releases too
      Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. }) => Ok(GameAction::from_key(code)),
      _ => Ok(GameAction::None),
    }
  }

  /// Set (and immediately draw) a new message
  pub fn show_message(&mut self, msg: &str) {
    self.last_message = msg.to_string();
    // A failed status line is not worth aborting the game for
    self.draw_message().ok();
  }

  fn draw_message(&mut self) -> IoResult<()> {
    let (cols, rows) = size().unwrap_or((80, 24));
    let y = rows.saturating_sub(2);

    let msg_len = self.last_message.chars().count() as u16;
    let x = cols.saturating_sub(msg_len) / 2;

    let mut out = stdout();
    queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine), MoveTo(x, y), Print(&self.last_message))?;
    out.flush()
  }

  fn glyph(cell: Cell) -> char {
    match cell {
      Cell::Empty => '.',
      Cell::Stone(role) => role.symbol(),
    }
  }

  pub fn draw_board(&mut self, board: &Board, cursor: Pos, last_stone: Option<Pos>, win_line: &[Pos]) -> IoResult<()> {
    let (cols, rows) = size().unwrap_or((80, 24));

    let bsize = BOARD_SIZE as u16;
    let used_width = bsize * Self::CELL_WIDTH - 1;
    let used_height = bsize;

    // Leave one row above for the top border
    let offset_x = cols.saturating_sub(used_width) / 2;
    let offset_y = (rows.saturating_sub(used_height) / 2).max(1);

    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    queue!(out, MoveTo(offset_x, offset_y - 1), Print("╔"), Print("═".repeat(used_width as usize)), Print("╗"))?;

    for i in 0..BOARD_SIZE {
      let sy = offset_y + i as u16;
      queue!(out, MoveTo(offset_x, sy), Print("║"))?;
      for j in 0..BOARD_SIZE {
        let sx = offset_x + (j as u16) * Self::CELL_WIDTH + 1;
        let cell = board.cell(i, j);

        // Cursor wins over the other highlights; an empty cursor cell shows '+'
        let color = if (i, j) == cursor {
          Some(Self::CURSOR_COLOR)
        } else if win_line.contains(&(i, j)) {
          Some(Self::WIN_LINE_COLOR)
        } else if last_stone == Some((i, j)) {
          Some(Self::LAST_STONE_COLOR)
        } else {
          None
        };
        let symbol = if (i, j) == cursor && cell.is_empty() { '+' } else { Self::glyph(cell) };

        match color {
          Some(c) => queue!(out, MoveTo(sx, sy), SetForegroundColor(c), Print(symbol), ResetColor)?,
          None => queue!(out, MoveTo(sx, sy), Print(symbol))?,
        }
        queue!(out, Print(" "))?;
      }
      queue!(out, Print("║"))?;
    }

    queue!(
      out,
      MoveTo(offset_x, offset_y + used_height),
      Print("╚"),
      Print("═".repeat(used_width as usize)),
      Print("╝")
    )?;
    out.flush()?;

    // Redraw the saved message so the board refresh doesn't wipe it
    self.draw_message()
  }
}
