//! Stateless drawing of the game view.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::chess::{Color, Square};
use crate::selection::ClickTarget;
use crate::surface::{BoardSurface, GameView, PieceVisual};

/// Terminal columns per square.
pub const CELL_WIDTH: u16 = 7;
/// Terminal rows per square.
pub const CELL_HEIGHT: u16 = 3;

const PANEL_WIDTH: u16 = 18;

const HELP_TEXT: &str = "click/Enter: select & move  arrows: cursor  s: start  r: reset  q: quit";

/// Where the 8x8 grid ended up on screen during the last draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    /// Visible part of the grid; its top-left corner is the corner of `a8`.
    pub area: Rect,
}

impl BoardGeometry {
    /// Screen rectangle of `square`, before clipping to the visible area.
    pub fn square_rect(&self, square: Square) -> Rect {
        let col = u16::from(square.file());
        let row = 7 - u16::from(square.rank());
        Rect::new(
            self.area.x + col * CELL_WIDTH,
            self.area.y + row * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// What a click at (`column`, `row`) landed on.
    ///
    /// The glyph in the middle of an occupied square is the piece visual;
    /// the rest of the square is its container.
    pub fn hit(&self, column: u16, row: u16, board: &BoardSurface) -> ClickTarget {
        if !self.area.contains(Position { x: column, y: row }) {
            return ClickTarget::Outside;
        }
        let (dx, dy) = (column - self.area.x, row - self.area.y);
        let (file, from_top) = (dx / CELL_WIDTH, dy / CELL_HEIGHT);
        if file >= 8 || from_top >= 8 {
            return ClickTarget::Outside;
        }
        let Some(square) = Square::new(file as u8, 7 - from_top as u8) else {
            return ClickTarget::Outside;
        };

        let (local_x, local_y) = (dx % CELL_WIDTH, dy % CELL_HEIGHT);
        let on_glyph = local_y == CELL_HEIGHT / 2 && (2..=4).contains(&local_x);
        if on_glyph && board.element(square).piece().is_some() {
            ClickTarget::Piece(square)
        } else {
            ClickTarget::Square(square)
        }
    }
}

/// Draws the whole view and returns where the board landed.
pub fn draw(frame: &mut Frame, view: &GameView, cursor: Square) -> BoardGeometry {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Title
            Constraint::Length(1),                   // Turn
            Constraint::Min(CELL_HEIGHT * 8 + 2),    // Board and scores
            Constraint::Length(3),                   // Status
            Constraint::Length(1),                   // Help
        ])
        .split(area);

    let title = view.title().as_deref().unwrap_or("Chess");
    let title = Paragraph::new(title)
        .style(Style::default().fg(TermColor::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let turn = Paragraph::new(view.turn().as_deref().unwrap_or(""))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(turn, chunks[1]);

    let board_width = CELL_WIDTH * 8 + 2;
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PANEL_WIDTH),
            Constraint::Length(board_width),
            Constraint::Length(PANEL_WIDTH),
            Constraint::Min(0),
        ])
        .split(chunks[2]);

    draw_score(frame, middle[1], view, 0);
    let geometry = draw_board(frame, middle[2], view.board(), cursor);
    draw_score(frame, middle[3], view, 1);

    let status = Paragraph::new(view.status().as_str())
        .style(Style::default().fg(TermColor::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(TermColor::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if let Some(notice) = view.notice() {
        draw_notice(frame, area, notice);
    }

    geometry
}

fn draw_score(frame: &mut Frame, area: Rect, view: &GameView, index: usize) {
    let Some(panel) = view.scores().as_ref().map(|panels| &panels[index]) else {
        return;
    };
    let text = vec![
        Line::from(Span::styled(
            panel.header().clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            panel.score().to_string(),
            Style::default().fg(TermColor::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &BoardSurface,
    cursor: Square,
) -> BoardGeometry {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let geometry = BoardGeometry { area: inner };
    for element in board.elements() {
        let square = *element.square();
        let rect = geometry.square_rect(square).intersection(inner);
        if rect.is_empty() {
            continue;
        }
        draw_square(
            frame,
            rect,
            element.piece().as_ref(),
            *element.selected(),
            square == cursor,
            square,
        );
    }
    geometry
}

fn draw_square(
    frame: &mut Frame,
    area: Rect,
    piece: Option<&PieceVisual>,
    selected: bool,
    under_cursor: bool,
    square: Square,
) {
    let light = (square.file() + square.rank()) % 2 == 1;
    let mut style = Style::default().bg(if light {
        TermColor::Rgb(240, 217, 181)
    } else {
        TermColor::Rgb(181, 136, 99)
    });
    if selected {
        style = style.bg(TermColor::Yellow);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let (glyph, fg) = match piece {
        Some(visual) => (
            glyph(visual),
            match visual.color() {
                Color::White => TermColor::White,
                Color::Black => TermColor::Black,
            },
        ),
        None => (" ".to_string(), TermColor::DarkGray),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(glyph, Style::default().fg(fg).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            square.label(),
            Style::default().fg(TermColor::DarkGray),
        )),
    ];
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Chess glyph for a piece visual, or its notation when unknown.
fn glyph(visual: &PieceVisual) -> String {
    let white = *visual.color() == Color::White;
    let (light, dark) = match visual.notation().to_ascii_uppercase().as_str() {
        "K" => ('♔', '♚'),
        "Q" => ('♕', '♛'),
        "R" => ('♖', '♜'),
        "B" => ('♗', '♝'),
        "N" => ('♘', '♞'),
        "P" => ('♙', '♟'),
        _ => return visual.notation().clone(),
    };
    let symbol = if white { light } else { dark };
    symbol.to_string()
}

fn draw_notice(frame: &mut Frame, area: Rect, notice: &str) {
    let popup = center_rect(area, 40, 5);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(TermColor::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Enter to dismiss, r to reset"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().title("Notice").borders(Borders::ALL));
    frame.render_widget(paragraph, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
