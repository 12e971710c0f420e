//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "four-in-a-row",
    about = "Four in a row on an 8x8 board, played by an alpha-beta search engine"
)]
pub enum FourInARow {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for the best move using alpha-beta pruning at the given `--depth` (default: 4) within `--time-limit` seconds per move (default: 5). The computer plays X and you play O. Who moves first is chosen at random unless you specify with `--first`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4), pausing `--delay-ms` between moves."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Determine the best move for `--mark` (default: X) from a position given with `--position` in row notation, e.g. `......../......../...` with rows A to H separated by '/'."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
}

impl crate::cli::commands::Command for FourInARow {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
        }
    }
}
