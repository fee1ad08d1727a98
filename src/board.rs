use std::fmt;

use itertools::iproduct;

pub const ROWS: u8 = 8;
pub const COLS: u8 = 8;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub fn to_human(&self) -> &str {
        match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    pub fn to_symbol(&self) -> &str {
        let is_white = self.color == Color::White;
        match self.kind {
            PieceKind::Pawn => {
                if is_white {
                    "♙"
                } else {
                    "♟"
                }
            }
            PieceKind::Rook => {
                if is_white {
                    "♖"
                } else {
                    "♜"
                }
            }
            PieceKind::Knight => {
                if is_white {
                    "♘"
                } else {
                    "♞"
                }
            }
            PieceKind::Bishop => {
                if is_white {
                    "♗"
                } else {
                    "♝"
                }
            }
            PieceKind::Queen => {
                if is_white {
                    "♕"
                } else {
                    "♛"
                }
            }
            PieceKind::King => {
                if is_white {
                    "♔"
                } else {
                    "♚"
                }
            }
        }
    }
}

/// A board coordinate. Row 0 is black's back rank, row 7 white's, so white
/// pawns advance toward row 0. Both components are in `[0, 8)`; constructing
/// a square off the board is a caller bug, not a runtime condition.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        debug_assert!(
            row < ROWS && col < COLS,
            "square ({row}, {col}) is off the board"
        );
        Square { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, ROWS - self.row)
    }
}

/// Origin, destination, and the kind a pawn becomes on the far rank.
/// `promotion` is only ever set by the pawn generator, and always to a queen.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }
}

/// An 8x8 grid of optional pieces. Boards are value types: applying a move
/// always produces a fresh successor and never touches the input, which is
/// what lets the legality filter probe hypothetical positions safely.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    squares: [[Option<Piece>; COLS as usize]; ROWS as usize],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            squares: [[None; COLS as usize]; ROWS as usize],
        }
    }

    /// The standard starting position.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        let placement = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in placement.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        for col in 0..COLS as usize {
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
        }
        board
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    /// Put a piece on a square, replacing whatever was there. Test and setup
    /// code builds positions with this; in-game positions only change through
    /// `apply_move`.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.row as usize][square.col as usize] = Some(piece);
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        iproduct!(0..ROWS, 0..COLS)
            .map(|(row, col)| Square::new(row, col))
            .find(|&square| {
                self.piece_at(square)
                    .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
            })
    }

    /// Produce the successor position for `mv` without touching `self`.
    /// Whatever occupied the destination is overwritten; a pawn landing on
    /// the far rank becomes the promotion kind carried by the move.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let piece = next.squares[mv.from.row as usize][mv.from.col as usize].take();
        next.squares[mv.to.row as usize][mv.to.col as usize] = match (mv.promotion, piece) {
            (Some(kind), Some(p)) if p.kind == PieceKind::Pawn => Some(Piece::new(kind, p.color)),
            _ => piece,
        };
        next
    }

    /// Human-readable description of `mv` as played from this position.
    pub fn describe_move(&self, mv: &Move) -> String {
        let Some(piece) = self.piece_at(mv.from) else {
            return format!("no piece at {}", mv.from);
        };
        let mut text = format!(
            "{} moves {} from {} to {}",
            piece.color.to_human(),
            piece.kind.to_human(),
            mv.from,
            mv.to
        );
        if let Some(captured) = self.piece_at(mv.to) {
            text.push_str(&format!(
                " capturing {} {}",
                captured.color.to_human(),
                captured.kind.to_human()
            ));
        }
        if let Some(kind) = mv.promotion {
            text.push_str(&format!(" promoting to {}", kind.to_human()));
        }
        text
    }

    pub fn draw_board(&self) -> String {
        let mut string = String::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let p = self.piece_at(Square::new(row, col));
                string = format!(
                    "{} {}",
                    string,
                    match p {
                        Some(pp) => pp.to_symbol(),
                        None => ".",
                    }
                );
            }
            string = format!("{}\n", string);
        }
        string
    }

    pub fn draw_to_terminal(&self) {
        println!("{}", self.draw_board());
    }
}
