//! Pseudo-legal move generation, attack detection, and the legality filter.
//!
//! A pseudo-legal move obeys a piece's movement geometry and occupancy rules
//! but may leave the mover's own king attacked; the legality filter applies
//! each candidate to a hypothetical board and keeps only the moves after
//! which the king is safe.

use itertools::iproduct;

use crate::board::{Board, Color, Move, PieceKind, Square, COLS, ROWS};

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < ROWS as i8 && col >= 0 && col < COLS as i8
}

/// Row delta for a pawn advance of the given color.
fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// A pawn move to `to`, promoting when it lands on the far rank.
fn pawn_move(from: Square, to: Square, color: Color) -> Move {
    Move {
        from,
        to,
        promotion: (to.row == promotion_row(color)).then_some(PieceKind::Queen),
    }
}

impl Board {
    fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let dir = pawn_direction(color);

        // forward one square if empty
        let one_row = from.row as i8 + dir;
        if in_bounds(one_row, from.col as i8) {
            let one = Square::new(one_row as u8, from.col);
            if self.piece_at(one).is_none() {
                moves.push(pawn_move(from, one, color));

                // forward two from the starting rank, both squares empty
                if from.row == pawn_start_row(color) {
                    let two = Square::new((from.row as i8 + 2 * dir) as u8, from.col);
                    if self.piece_at(two).is_none() {
                        moves.push(Move::new(from, two));
                    }
                }
            }
        }

        // diagonal captures
        for dc in [-1, 1] {
            let (row, col) = (from.row as i8 + dir, from.col as i8 + dc);
            if !in_bounds(row, col) {
                continue;
            }
            let to = Square::new(row as u8, col as u8);
            if self.piece_at(to).is_some_and(|p| p.color != color) {
                moves.push(pawn_move(from, to, color));
            }
        }
    }

    /// Walk each direction square by square until the edge or an occupied
    /// square; an enemy square is included as a capture and ends the ray, a
    /// friendly square ends the ray without being included.
    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let (mut row, mut col) = (from.row as i8 + dr, from.col as i8 + dc);
            while in_bounds(row, col) {
                let to = Square::new(row as u8, col as u8);
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to)),
                    Some(other) => {
                        if other.color != color {
                            moves.push(Move::new(from, to));
                        }
                        break;
                    }
                }
                row += dr;
                col += dc;
            }
        }
    }

    fn knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for (dr, dc) in KNIGHT_JUMPS {
            let (row, col) = (from.row as i8 + dr, from.col as i8 + dc);
            if !in_bounds(row, col) {
                continue;
            }
            let to = Square::new(row as u8, col as u8);
            if self.piece_at(to).map_or(true, |p| p.color != color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    fn king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for (dr, dc) in KING_STEPS {
            let (row, col) = (from.row as i8 + dr, from.col as i8 + dc);
            if !in_bounds(row, col) {
                continue;
            }
            let to = Square::new(row as u8, col as u8);
            if self.piece_at(to).map_or(true, |p| p.color != color) {
                moves.push(Move::new(from, to));
            }
        }
    }

    /// Every move of `color` obeying piece geometry and occupancy, in
    /// row-major board order then per-square generator order. The ordering
    /// carries no meaning but stays deterministic for reproducible tests.
    pub fn generate_pseudo_legal(&self, color: Color) -> Vec<Move> {
        let mut moves: Vec<Move> = vec![];
        for (row, col) in iproduct!(0..ROWS, 0..COLS) {
            let square = Square::new(row, col);
            let Some(piece) = self.piece_at(square) else {
                continue;
            };
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(square, color, &mut moves),
                PieceKind::Rook => {
                    self.sliding_moves(square, color, &ORTHOGONAL_DIRECTIONS, &mut moves)
                }
                PieceKind::Bishop => {
                    self.sliding_moves(square, color, &DIAGONAL_DIRECTIONS, &mut moves)
                }
                PieceKind::Queen => self.sliding_moves(square, color, &QUEEN_DIRECTIONS, &mut moves),
                PieceKind::Knight => self.knight_moves(square, color, &mut moves),
                PieceKind::King => self.king_moves(square, color, &mut moves),
            }
        }
        moves
    }

    /// Could any piece of `attacker` capture onto `square` right now?
    ///
    /// Deliberately independent of the move generators: it probes the fixed
    /// attack patterns around the square instead. Pawns are the special case,
    /// probed in reverse of their direction of travel.
    pub fn square_attacked_by(&self, square: Square, attacker: Color) -> bool {
        let (row, col) = (square.row as i8, square.col as i8);

        // pawns
        let dir = pawn_direction(attacker);
        for dc in [-1, 1] {
            let (pr, pc) = (row - dir, col - dc);
            if in_bounds(pr, pc)
                && self
                    .piece_at(Square::new(pr as u8, pc as u8))
                    .is_some_and(|p| p.color == attacker && p.kind == PieceKind::Pawn)
            {
                return true;
            }
        }

        // knights
        for (dr, dc) in KNIGHT_JUMPS {
            let (nr, nc) = (row + dr, col + dc);
            if in_bounds(nr, nc)
                && self
                    .piece_at(Square::new(nr as u8, nc as u8))
                    .is_some_and(|p| p.color == attacker && p.kind == PieceKind::Knight)
            {
                return true;
            }
        }

        // enemy king on an adjacent square
        for (dr, dc) in KING_STEPS {
            let (kr, kc) = (row + dr, col + dc);
            if in_bounds(kr, kc)
                && self
                    .piece_at(Square::new(kr as u8, kc as u8))
                    .is_some_and(|p| p.color == attacker && p.kind == PieceKind::King)
            {
                return true;
            }
        }

        // sliding attackers, each ray stopping at the first occupied square
        for (dr, dc) in ORTHOGONAL_DIRECTIONS {
            let (mut r, mut c) = (row + dr, col + dc);
            while in_bounds(r, c) {
                if let Some(p) = self.piece_at(Square::new(r as u8, c as u8)) {
                    if p.color == attacker
                        && (p.kind == PieceKind::Rook || p.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }
        for (dr, dc) in DIAGONAL_DIRECTIONS {
            let (mut r, mut c) = (row + dr, col + dc);
            while in_bounds(r, c) {
                if let Some(p) = self.piece_at(Square::new(r as u8, c as u8)) {
                    if p.color == attacker
                        && (p.kind == PieceKind::Bishop || p.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                r += dr;
                c += dc;
            }
        }

        false
    }

    /// Is `color`'s king currently attacked? A board with no king of that
    /// color reports not-in-check, which keeps sparse test positions usable.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.square_attacked_by(king, color.opponent()),
            None => false,
        }
    }

    /// The pseudo-legal moves of `color` that do not leave its own king
    /// attacked, checked by applying each candidate to a hypothetical board.
    pub fn generate_legal_moves(&self, color: Color) -> Vec<Move> {
        self.generate_pseudo_legal(color)
            .into_iter()
            .filter(|mv| !self.apply_move(mv).is_in_check(color))
            .collect()
    }
}
