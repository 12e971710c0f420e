//! Watch command - watch the computer play against itself.

use std::time::Duration;

use four_in_a_row::board::{Board, Mark};
use four_in_a_row::game::input_source::EngineInput;
use four_in_a_row::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(
        short = "t",
        long = "time-limit",
        default_value = "5",
        help = "Search budget per move in seconds"
    )]
    pub time_limit: u64,
    #[structopt(
        long = "delay-ms",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.time_limit, Mark::X, Board::new());
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
            Mark::X,
        );
    }
}
