//! Integration tests over the engine's public surface, exercised the way a
//! board renderer and input handler would consume it.

use unichess::ai::select_move;
use unichess::board::{Board, Color, Move, Piece, PieceKind, Square};
use unichess::game::{game_status, Status};

/// The input-handler flow: select a piece, highlight its destinations,
/// validate a click against them, then apply the confirmed move.
#[test]
fn user_move_flow_from_the_start() {
    let board = Board::initial();
    let legal = board.generate_legal_moves(Color::White);
    assert_eq!(legal.len(), 20);

    // highlight squares for the e2 pawn
    let e2 = Square::new(6, 4);
    let highlighted: Vec<Square> = legal
        .iter()
        .filter(|m| m.from == e2)
        .map(|m| m.to)
        .collect();
    assert_eq!(highlighted, vec![Square::new(5, 4), Square::new(4, 4)]);

    // a click on e5 matches no highlighted square and is rejected upstream
    assert!(!highlighted.contains(&Square::new(3, 4)));

    // a click on e4 resolves to a legal move, which the engine applies
    let chosen = legal
        .iter()
        .find(|m| m.from == e2 && m.to == Square::new(4, 4))
        .copied()
        .expect("e2-e4 must be legal at the start");
    let board = board.apply_move(&chosen);

    assert!(board.piece_at(e2).is_none());
    assert_eq!(
        board.piece_at(Square::new(4, 4)),
        Some(Piece::new(PieceKind::Pawn, Color::White))
    );
    assert_eq!(game_status(&board, Color::Black), None);
}

#[test]
fn renderer_check_highlight_flow() {
    // the renderer asks for the checked king's square after each ply
    let board = Board::initial();
    let board = board.apply_move(&Move::new(Square::new(6, 4), Square::new(4, 4)));
    let board = board.apply_move(&Move::new(Square::new(1, 5), Square::new(2, 5)));
    let board = board.apply_move(&Move::new(Square::new(7, 3), Square::new(3, 7)));

    // 1. e4 f6 2. Qh5+
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.find_king(Color::Black), Some(Square::new(0, 4)));
    assert_eq!(game_status(&board, Color::Black), None);
}

#[test]
fn ai_ply_flow_until_the_host_reapplies() {
    let board = Board::initial();

    // the host invokes the selector for the engine-controlled side,
    // re-applies the chosen move, then reclassifies for the next side
    let mv = select_move(&board, Color::Black).expect("black has moves at the start");
    assert!(board.generate_legal_moves(Color::Black).contains(&mv));

    let board = board.apply_move(&mv);
    assert_eq!(game_status(&board, Color::White), None);
}

#[test]
fn terminal_positions_resolve_through_game_status() {
    // the selector signals exhaustion with None; the classifier names it
    let mut board = Board::empty();
    board.place(Square::new(0, 4), Piece::new(PieceKind::King, Color::Black));
    board.place(Square::new(7, 3), Piece::new(PieceKind::Rook, Color::White));
    board.place(Square::new(7, 4), Piece::new(PieceKind::Rook, Color::White));
    board.place(Square::new(7, 5), Piece::new(PieceKind::Rook, Color::White));
    board.place(Square::new(7, 6), Piece::new(PieceKind::King, Color::White));

    assert_eq!(select_move(&board, Color::Black), None);
    let status = game_status(&board, Color::Black).expect("position is terminal");
    assert_eq!(status, Status::Checkmate(Color::White));
    assert_eq!(status.to_string(), "Checkmate! White wins");
}

#[test]
fn bare_kings_keep_playing() {
    let mut board = Board::empty();
    board.place(Square::new(7, 3), Piece::new(PieceKind::King, Color::White));
    board.place(Square::new(0, 3), Piece::new(PieceKind::King, Color::Black));

    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));

    let moves = board.generate_legal_moves(Color::White);
    assert!(!moves.is_empty() && moves.len() <= 8);
    assert!(select_move(&board, Color::White).is_some());
    assert_eq!(game_status(&board, Color::White), None);
}

#[test]
fn promotion_always_yields_a_queen() {
    for col in 0..8 {
        let mut board = Board::empty();
        board.place(
            Square::new(1, col),
            Piece::new(PieceKind::Pawn, Color::White),
        );
        board.place(Square::new(7, 7), Piece::new(PieceKind::King, Color::White));
        board.place(Square::new(5, 0), Piece::new(PieceKind::King, Color::Black));

        let push = board
            .generate_legal_moves(Color::White)
            .into_iter()
            .find(|m| m.from == Square::new(1, col) && m.to == Square::new(0, col))
            .expect("promotion push must be legal");
        assert_eq!(push.promotion, Some(PieceKind::Queen));

        let after = board.apply_move(&push);
        assert_eq!(
            after.piece_at(Square::new(0, col)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
    }
}
