//! Keyboard and mouse mapping to controller events.

use crate::chess::Square;
use crate::controller::UiEvent;
use crate::selection::ClickTarget;
use crate::surface::BoardSurface;
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the controller.
    Dispatch(UiEvent),
    /// Move the keyboard cursor.
    Cursor(Square),
    /// Leave the client.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves the cursor one square; stays put at the board edge.
pub fn move_cursor(cursor: Square, key: KeyCode) -> Square {
    let (file, rank) = (cursor.file(), cursor.rank());
    let next = match key {
        KeyCode::Right => Square::new(file + 1, rank),
        KeyCode::Left => file.checked_sub(1).and_then(|f| Square::new(f, rank)),
        KeyCode::Up => Square::new(file, rank + 1),
        KeyCode::Down => rank.checked_sub(1).and_then(|r| Square::new(file, r)),
        _ => None,
    };
    next.unwrap_or(cursor)
}

/// Keyboard click on the cursor square, hitting the piece when there is one.
pub fn cursor_click(cursor: Square, board: &BoardSurface) -> ClickTarget {
    if board.element(cursor).piece().is_some() {
        ClickTarget::Piece(cursor)
    } else {
        ClickTarget::Square(cursor)
    }
}

/// Maps a key press.
pub fn key_action(
    key: KeyCode,
    cursor: Square,
    board: &BoardSurface,
    notice_open: bool,
) -> KeyAction {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter if notice_open => KeyAction::Dispatch(UiEvent::DismissNotice),
        KeyCode::Char('s') => KeyAction::Dispatch(UiEvent::Start),
        KeyCode::Char('r') => KeyAction::Dispatch(UiEvent::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => {
            KeyAction::Dispatch(UiEvent::Click(cursor_click(cursor, board)))
        }
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyAction::Cursor(move_cursor(cursor, key))
        }
        _ => KeyAction::Ignore,
    }
}
