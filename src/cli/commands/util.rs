//! Shared utilities for CLI commands.

use std::time::Duration;

use four_in_a_row::board::{Board, Mark};
use four_in_a_row::evaluate::GameEnding;
use four_in_a_row::game::engine::EngineConfig;
use four_in_a_row::game::input_source::InputSource;
use four_in_a_row::game::r#loop::GameLoop;
use four_in_a_row::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(
    input_source: I,
    renderer: R,
    config: EngineConfig,
    first_turn: Mark,
) -> Option<GameEnding>
where
    I: InputSource,
    R: GameRenderer,
{
    let mut game = GameLoop::new(input_source, renderer, config, first_turn);
    game.run()
}

pub(crate) fn create_config(
    depth: u8,
    time_limit_secs: u64,
    computer_mark: Mark,
    starting_position: Board,
) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        time_limit: Duration::from_secs(time_limit_secs),
        computer_mark,
        starting_position,
    }
}
