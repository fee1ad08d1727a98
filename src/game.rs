use std::fmt;

use chrono::prelude::*;

use crate::ai::select_move;
use crate::board::{Board, Color};

/// Terminal state of a game. An in-progress game has no status, so the
/// classifier hands back an `Option<Status>`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    /// The side to move is checkmated; the payload is the winner.
    Checkmate(Color),
    Stalemate,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Status::Checkmate(winner) => {
                let name = match winner {
                    Color::White => "White",
                    Color::Black => "Black",
                };
                write!(f, "Checkmate! {} wins", name)
            }
            Status::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Classify the position for the side to move. This is the one place that
/// decides a game is over; callers invoke it after every ply with the new
/// side to move.
pub fn game_status(board: &Board, side_to_move: Color) -> Option<Status> {
    if !board.generate_legal_moves(side_to_move).is_empty() {
        return None;
    }
    if board.is_in_check(side_to_move) {
        Some(Status::Checkmate(side_to_move.opponent()))
    } else {
        Some(Status::Stalemate)
    }
}

/// Drives alternating engine plies over a single board, replacing the board
/// wholesale after each move.
pub struct Game {
    board: Board,
    turn: Color,
    plies_played: u32,
    game_start_time: DateTime<Local>,
    silent: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            turn: Color::White,
            plies_played: 0,
            game_start_time: Local::now(),
            silent: false,
        }
    }

    pub fn new_silent() -> Self {
        Self {
            silent: true,
            ..Game::new()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn plies_played(&self) -> u32 {
        self.plies_played
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.game_start_time
    }

    /// Play one engine ply for the side to move and reclassify the position
    /// for the other side. Returns the status after the ply, `None` while the
    /// game is still in progress.
    pub fn step(&mut self) -> Option<Status> {
        let Some(selected) = select_move(&self.board, self.turn) else {
            // no legal moves: the classifier decides mate vs stalemate
            return game_status(&self.board, self.turn);
        };

        if !self.silent {
            println!(
                "ply {}: {}",
                self.plies_played + 1,
                self.board.describe_move(&selected)
            );
        }

        self.board = self.board.apply_move(&selected);
        self.plies_played += 1;
        self.turn = self.turn.opponent();

        if !self.silent {
            self.board.draw_to_terminal();
        }

        game_status(&self.board, self.turn)
    }

    /// Step plies until the game ends or `max_plies` have been played.
    /// Returns the terminal status, or `None` if the cap was reached first.
    pub fn play(&mut self, max_plies: u32) -> Option<Status> {
        for _ in 0..max_plies {
            if let Some(status) = self.step() {
                if !self.silent {
                    println!("{}", status);
                }
                return Some(status);
            }
        }
        None
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
