use connect4_engine::board::{Board, Cell};
use connect4_engine::player::Player;
use connect4_engine::win::{has_win, has_win_through, winning_line};

const P1: Player = Player::One;
const P2: Player = Player::Two;

/// Drops `(column, player)` pairs in order.
fn play(drops: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for &(col, player) in drops {
        board.drop_piece(col, player).expect("column has room");
    }
    board
}

#[test]
fn bottom_row_horizontal_wins() {
    let board = play(&[(0, P1), (1, P1), (2, P1), (3, P1)]);
    assert!(has_win(&board, P1));
    assert!(!has_win(&board, P2));
    assert_eq!(
        winning_line(&board, P1),
        Some([(5, 0), (5, 1), (5, 2), (5, 3)])
    );
}

#[test]
fn horizontal_broken_by_other_player_is_not_a_win() {
    let board = play(&[(0, P1), (1, P1), (2, P2), (3, P1)]);
    assert!(!has_win(&board, P1));
    assert!(!has_win(&board, P2));
}

#[test]
fn vertical_stack_wins() {
    let board = play(&[(0, P1), (0, P1), (0, P1), (0, P1)]);
    assert_eq!(board.cell_at(2, 0), Some(Cell::Taken(P1)));
    assert!(has_win(&board, P1));
    assert!(has_win_through(&board, 2, 0, P1));
}

#[test]
fn rising_diagonal_wins() {
    // (5,0) (4,1) (3,2) (2,3)
    let board = play(&[
        (0, P1),
        (1, P2),
        (1, P1),
        (2, P2),
        (2, P2),
        (2, P1),
        (3, P2),
        (3, P2),
        (3, P2),
        (3, P1),
    ]);
    assert!(has_win(&board, P1));
    assert!(!has_win(&board, P2));
    assert!(has_win_through(&board, 2, 3, P1));
    assert_eq!(
        winning_line(&board, P1),
        Some([(2, 3), (3, 2), (4, 1), (5, 0)])
    );
}

#[test]
fn falling_diagonal_wins() {
    // (5,3) (4,2) (3,1) (2,0)
    let board = play(&[
        (3, P1),
        (2, P2),
        (2, P1),
        (1, P2),
        (1, P2),
        (1, P1),
        (0, P2),
        (0, P2),
        (0, P2),
        (0, P1),
    ]);
    assert!(has_win(&board, P1));
    assert!(!has_win(&board, P2));
    assert!(has_win_through(&board, 2, 0, P1));
    assert_eq!(
        winning_line(&board, P1),
        Some([(2, 0), (3, 1), (4, 2), (5, 3)])
    );
}

#[test]
fn line_longer_than_four_still_wins() {
    let board = play(&[(1, P2), (2, P2), (3, P2), (4, P2), (5, P2)]);
    assert!(has_win(&board, P2));
    assert!(has_win_through(&board, 5, 5, P2));
    assert!(has_win_through(&board, 5, 1, P2));
}

#[test]
fn full_board_without_lines_has_no_winner() {
    // Rows top to bottom; each row alternates, row phases follow 0,1,1,0,0,1.
    let rows = [
        "1212121", "2121212", "2121212", "1212121", "1212121", "2121212",
    ];
    let mut board = Board::new();
    for col in 0..7 {
        for row in rows.iter().rev() {
            let player = match row.as_bytes()[col] {
                b'1' => P1,
                _ => P2,
            };
            board.drop_piece(col, player).unwrap();
        }
    }
    assert!(board.is_full());
    assert!(!has_win(&board, P1));
    assert!(!has_win(&board, P2));
}
