//! Tests for the two-click selection state machine.

use chess_client::{
    BoardSurface, ClickTarget, MoveRequest, SelectionState, SelectionStateMachine, Square,
};

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

#[test]
fn test_first_click_selects_and_highlights() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    let emitted = selection.click(ClickTarget::Piece(sq("e2")), &mut surface);

    assert_eq!(emitted, None);
    assert_eq!(selection.state(), SelectionState::Selected(sq("e2")));
    assert_eq!(surface.selected_squares(), vec![sq("e2")]);
}

#[test]
fn test_second_click_emits_move_and_clears() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    selection.click(ClickTarget::Piece(sq("e2")), &mut surface);
    let emitted = selection.click(ClickTarget::Square(sq("e4")), &mut surface);

    assert_eq!(emitted, Some(MoveRequest::new(sq("e2"), sq("e4"))));
    assert_eq!(selection.state(), SelectionState::Idle);
    assert!(surface.selected_squares().is_empty());
}

#[test]
fn test_piece_and_container_clicks_are_equivalent() {
    let mut via_piece = (SelectionStateMachine::new(), BoardSurface::new());
    let mut via_square = (SelectionStateMachine::new(), BoardSurface::new());

    via_piece.0.click(ClickTarget::Piece(sq("g1")), &mut via_piece.1);
    via_square.0.click(ClickTarget::Square(sq("g1")), &mut via_square.1);

    assert_eq!(via_piece.0.selected(), via_square.0.selected());
    assert_eq!(via_piece.1, via_square.1);
}

#[test]
fn test_self_move_is_forwarded() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    selection.click(ClickTarget::Square(sq("d4")), &mut surface);
    let emitted = selection.click(ClickTarget::Piece(sq("d4")), &mut surface);

    assert_eq!(emitted, Some(MoveRequest::new(sq("d4"), sq("d4"))));
    assert_eq!(selection.selected(), None);
    assert!(surface.selected_squares().is_empty());
}

#[test]
fn test_click_outside_board_changes_nothing() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    assert_eq!(selection.click(ClickTarget::Outside, &mut surface), None);
    assert_eq!(selection.state(), SelectionState::Idle);

    selection.click(ClickTarget::Square(sq("a7")), &mut surface);
    assert_eq!(selection.click(ClickTarget::Outside, &mut surface), None);
    assert_eq!(selection.selected(), Some(sq("a7")));
}

#[test]
fn test_never_more_than_one_selected() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    let clicks = ["a1", "b2", "c3", "c3", "h8", "a1", "d5", "e6", "f7"];
    let mut emitted = Vec::new();
    for (i, label) in clicks.iter().enumerate() {
        let target = if i % 2 == 0 {
            ClickTarget::Piece(sq(label))
        } else {
            ClickTarget::Square(sq(label))
        };
        if let Some(request) = selection.click(target, &mut surface) {
            emitted.push(request);
        }
        assert!(surface.selected_squares().len() <= 1);
        assert_eq!(surface.selected_squares().first().copied(), selection.selected());
    }

    assert_eq!(emitted.len(), 4);
    assert_eq!(emitted[1], MoveRequest::new(sq("c3"), sq("c3")));
    assert_eq!(selection.selected(), Some(sq("f7")));
}

#[test]
fn test_reset_clears_state_and_highlight() {
    let mut surface = BoardSurface::new();
    let mut selection = SelectionStateMachine::new();

    selection.click(ClickTarget::Square(sq("b8")), &mut surface);
    selection.reset(&mut surface);

    assert_eq!(selection.state(), SelectionState::Idle);
    assert!(surface.selected_squares().is_empty());
}
