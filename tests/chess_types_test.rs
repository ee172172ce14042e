//! Tests for squares and wire snapshots.

use chess_client::{
    BoardSnapshot, Color, GameStateSnapshot, MoveOutcome, MoveRequest, MoveResult, PieceSnapshot,
    Score, ScoreSnapshot, Square,
};

fn sq(label: &str) -> Square {
    label.parse().unwrap()
}

#[test]
fn test_square_labels() {
    assert_eq!(sq("a1").index(), 0);
    assert_eq!(sq("h8").index(), 63);
    assert_eq!(sq("e2").file(), 4);
    assert_eq!(sq("e2").rank(), 1);
    assert_eq!(Square::new(4, 3).unwrap().label(), "e4");
    assert_eq!(Square::all().count(), 64);
}

#[test]
fn test_square_rejects_bad_labels() {
    for label in ["", "e", "e9", "i1", "E2", "e22", "2e", "e0"] {
        assert!(label.parse::<Square>().is_err(), "accepted {:?}", label);
    }
}

#[test]
fn test_game_state_from_wire() {
    let json = r#"{"piecesAndPositions":{"e2":{"color":"WHITE","notation":"P"}},"color":"WHITE","title":"Alpha"}"#;
    let state: GameStateSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(state.title, "Alpha");
    assert_eq!(state.color, Color::White);
    assert_eq!(state.pieces_and_positions.len(), 1);
    assert_eq!(
        state.pieces_and_positions.get(sq("e2")),
        Some(&PieceSnapshot::new(Color::White, "P"))
    );
}

#[test]
fn test_game_state_rejects_bad_square_key() {
    let json = r#"{"piecesAndPositions":{"z9":{"color":"WHITE","notation":"P"}},"color":"WHITE","title":"Alpha"}"#;
    assert!(serde_json::from_str::<GameStateSnapshot>(json).is_err());
}

#[test]
fn test_game_state_rejects_unknown_turn_color() {
    let json = r#"{"piecesAndPositions":{},"color":"GREEN","title":"Alpha"}"#;
    assert!(serde_json::from_str::<GameStateSnapshot>(json).is_err());
}

#[test]
fn test_game_state_rejects_missing_fields() {
    let json = r#"{"color":"BLACK","title":"Alpha"}"#;
    assert!(serde_json::from_str::<GameStateSnapshot>(json).is_err());
}

#[test]
fn test_board_snapshot_holds_one_piece_per_square() {
    let mut board = BoardSnapshot::new();
    board.insert(sq("a1"), PieceSnapshot::new(Color::White, "R"));
    let previous = board.insert(sq("a1"), PieceSnapshot::new(Color::Black, "Q"));

    assert_eq!(previous, Some(PieceSnapshot::new(Color::White, "R")));
    assert_eq!(board.len(), 1);
}

#[test]
fn test_score_snapshot_from_wire() {
    let score: ScoreSnapshot =
        serde_json::from_str(r#"{"colorsScore":{"BLACK":38,"WHITE":37.5}}"#).unwrap();
    assert_eq!(score.for_color(Color::Black), Score(38.0));
    assert_eq!(score.for_color(Color::White).to_string(), "37.5");
    assert_eq!(score.for_color(Color::Black).to_string(), "38");
}

#[test]
fn test_move_request_wire_shape() {
    let body = serde_json::to_value(MoveRequest::new(sq("e2"), sq("e4"))).unwrap();
    assert_eq!(body, serde_json::json!({"from": "e2", "to": "e4"}));
}

#[test]
fn test_move_result_outcomes() {
    let terminal: MoveResult = serde_json::from_str(r#"{"end":true,"winner":"WHITE"}"#).unwrap();
    assert_eq!(terminal.outcome().unwrap(), MoveOutcome::Terminal);
    assert!(terminal.extra.contains_key("winner"));

    let running: MoveResult = serde_json::from_str(r#"{"end":false}"#).unwrap();
    assert_eq!(running.outcome().unwrap(), MoveOutcome::Continue);
}

#[test]
fn test_move_result_without_end_is_malformed() {
    let result: MoveResult = serde_json::from_str(r#"{"team":"BLACK"}"#).unwrap();
    let err = result.outcome().unwrap_err();
    assert!(err.is_malformed());

    let null_end: MoveResult = serde_json::from_str(r#"{"end":null}"#).unwrap();
    assert!(null_end.outcome().unwrap_err().is_malformed());
}
