//! Play command - play a game against the computer.

use four_in_a_row::board::{Board, Mark};
use four_in_a_row::game::first_player::FirstPlayer;
use four_in_a_row::game::input_source::ConditionalInput;
use four_in_a_row::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

const COMPUTER_MARK: Mark = Mark::X;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(
        short = "t",
        long = "time-limit",
        default_value = "5",
        help = "Search budget per computer move in seconds"
    )]
    pub time_limit: u64,
    #[structopt(
        short = "f",
        long = "first",
        default_value = "random",
        help = "Who moves first: human, computer or random"
    )]
    pub first: FirstPlayer,
}

impl Command for PlayArgs {
    fn execute(self) {
        let human_mark = COMPUTER_MARK.opposite();
        let first_turn = match self.first {
            FirstPlayer::Human => human_mark,
            FirstPlayer::Computer => COMPUTER_MARK,
        };
        println!("You are {}. {} moves first.", human_mark, first_turn);

        let config = create_config(self.depth, self.time_limit, COMPUTER_MARK, Board::new());
        run_game_loop(
            ConditionalInput { human_mark },
            ConditionalStatsRenderer { human_mark },
            config,
            first_turn,
        );
    }
}
