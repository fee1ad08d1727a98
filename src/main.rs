use clap::Parser;
use color_eyre::Result;

use unichess::board::Color;
use unichess::game::{Game, Status};

#[derive(Parser, Debug)]
#[command(name = "unichess")]
#[command(about = "Watch the rules engine play itself in the terminal")]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Stop a game after this many plies if it has not ended
    #[arg(long, default_value_t = 300)]
    max_plies: u32,

    /// Only print results, not every move and position
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut stalemates = 0u32;
    let mut unfinished = 0u32;

    for game_number in 1..=args.games {
        let mut game = if args.quiet {
            Game::new_silent()
        } else {
            Game::new()
        };
        println!(
            "game {} started at {}",
            game_number,
            game.started_at().format("%Y-%m-%d %H:%M:%S")
        );

        match game.play(args.max_plies) {
            Some(status) => {
                match status {
                    Status::Checkmate(Color::White) => white_wins += 1,
                    Status::Checkmate(Color::Black) => black_wins += 1,
                    Status::Stalemate => stalemates += 1,
                }
                println!(
                    "game {}: {} after {} plies",
                    game_number,
                    status,
                    game.plies_played()
                );
            }
            None => {
                unfinished += 1;
                println!(
                    "game {}: no result after {} plies",
                    game_number,
                    game.plies_played()
                );
            }
        }
    }

    println!(
        "{} games: white {} - black {} - stalemate {} - unfinished {}",
        args.games, white_wins, black_wins, stalemates, unfinished
    );
    Ok(())
}
