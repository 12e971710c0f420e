//! Calculate best move command - determine the best move from a position.

use four_in_a_row::board::{Board, Mark};
use four_in_a_row::game::engine::Engine;
use four_in_a_row::input_handler::notation::EMPTY_POSITION_NOTATION;
use structopt::StructOpt;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "t", long = "time-limit", default_value = "5")]
    pub time_limit: u64,
    #[structopt(short, long, default_value = "X")]
    pub mark: Mark,
    #[structopt(short, long = "position", default_value = EMPTY_POSITION_NOTATION)]
    pub position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.time_limit, self.mark, self.position);
        let mut engine = Engine::with_config(config);

        if engine.valid_moves().is_empty() {
            eprintln!("There are no valid moves in the given position.");
            return;
        }

        match engine.get_best_move() {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
