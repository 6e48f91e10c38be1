//! Tests for the game history store.

use timetoe_core::{
    GameHistory, GameStatus, JumpError, MoveError, MoveLabel, Player, Position, Status,
};

#[test]
fn test_x_wins_top_row() {
    let mut game = GameHistory::new();
    for index in [0, 4, 1, 3, 2] {
        game.play_move(index).expect("legal move");
    }

    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    let line = game.displayed_winning_line().expect("X has a line");
    assert_eq!(line.indices(), [0, 1, 2]);
    assert_eq!(line.player(), Player::X);

    assert_eq!(game.play_move(5), Err(MoveError::GameOver));
    assert_eq!(game.len(), 6);
}

#[test]
fn test_draw_rejects_every_move() {
    let mut game = GameHistory::replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("valid replay");

    assert_eq!(game.displayed_outcome(), GameStatus::Draw);
    assert_eq!(game.status(), Status::Draw);
    assert_eq!(game.status().to_string(), "Draw");
    assert!(game.displayed_winning_line().is_none());

    for index in 0..9 {
        assert!(game.play_move(index).is_err());
    }
    assert_eq!(game.len(), 10);
}

#[test]
fn test_repeated_illegal_move_keeps_length() {
    let mut game = GameHistory::replay(&[4]).expect("valid replay");
    for _ in 0..5 {
        assert_eq!(
            game.play_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.len(), 2);
    }
}

#[test]
fn test_jump_round_trip() {
    let mut game = GameHistory::replay(&[0, 4, 8, 2, 6]).expect("valid replay");
    let len = game.len();

    for ply in 0..len {
        game.jump_to(ply).expect("ply exists");
        assert_eq!(game.displayed_board(), *game.snapshots()[ply].board());
        assert_eq!(game.current_move(), ply);
        assert_eq!(game.len(), len);
    }
}

#[test]
fn test_jump_out_of_range_is_rejected() {
    let mut game = GameHistory::replay(&[0, 4]).expect("valid replay");
    assert_eq!(game.jump_to(3), Err(JumpError::OutOfRange { ply: 3, len: 3 }));
    assert_eq!(game.current_move(), 2);
}

#[test]
fn test_branch_discards_future() {
    let mut game = GameHistory::replay(&[0, 4, 8, 2, 6]).expect("valid replay");
    assert_eq!(game.len(), 6);

    game.jump_to(2).expect("ply 2 exists");
    assert_eq!(game.current_player(), Player::X);
    game.play_move(7).expect("bottom-center is free at ply 2");

    assert_eq!(game.len(), 4);
    assert_eq!(game.current_move(), 3);
    assert!(game.is_at_tail());
    let last = game.displayed().last_move().expect("ply 3 has a move");
    assert_eq!(last.position(), Position::BottomCenter);
    assert_eq!(last.player(), Player::X);
}

#[test]
fn test_rejected_branch_keeps_future() {
    let mut game = GameHistory::replay(&[0, 4, 8]).expect("valid replay");
    game.jump_to(1).expect("ply 1 exists");

    // Square 0 is taken at ply 1, so nothing is discarded.
    assert!(game.play_move(0).is_err());
    assert_eq!(game.len(), 4);
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_browsing_after_win() {
    let mut game = GameHistory::replay(&[0, 4, 1, 3, 2]).expect("valid replay");

    game.jump_to(4).expect("ply 4 exists");
    assert_eq!(game.status(), Status::NextPlayer(Player::X));
    assert!(game.displayed_winning_line().is_none());

    // Playing elsewhere from ply 4 abandons the win.
    game.play_move(8).expect("free square");
    assert_eq!(game.len(), 6);
    assert_eq!(game.status(), Status::NextPlayer(Player::O));
}

#[test]
fn test_move_list_matches_history() {
    let mut game = GameHistory::new();
    for index in [4, 0, 8] {
        game.play_move(index).expect("legal move");
        let labels = game.move_list();
        assert_eq!(labels.len(), game.len());
        assert_eq!(labels[0], MoveLabel::GameStart);
        assert_eq!(labels[0].to_string(), "Go to game start");
        for (ply, label) in labels.iter().enumerate().skip(1) {
            assert_eq!(label.to_string(), format!("Go to move #{ply}"));
            assert_eq!(label.ply(), ply);
        }
    }
}

#[test]
fn test_status_text_next_player() {
    let mut game = GameHistory::new();
    assert_eq!(game.status().to_string(), "Next player: X");
    game.play_move(0).expect("legal move");
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_history_serializes() {
    let game = GameHistory::replay(&[4]).expect("valid replay");
    let json = serde_json::to_value(&game).expect("serializable");
    assert_eq!(json["current"], 1);
    assert_eq!(json["snapshots"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["snapshots"][1]["last_move"]["player"], "X");
    assert_eq!(json["snapshots"][1]["last_move"]["position"], "Center");
}
