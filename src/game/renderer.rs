use crate::board::Mark;
use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;
use std::time::Duration;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        status: Option<&str>,
    );
    fn announce(&self, ending: GameEnding) -> String;
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.get_search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, prunes: {})\n* Move took: {} (limit: {:?})",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats.prunes,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d)),
        stats.time_limit,
    )
}

/// Computer plays both sides.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        status: Option<&str>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
            status,
        );
    }

    fn announce(&self, ending: GameEnding) -> String {
        match ending {
            GameEnding::Win(mark) => format!("{} wins!", mark),
            GameEnding::Draw => "It's a draw!".to_string(),
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Human against the computer.
pub struct ConditionalStatsRenderer {
    pub human_mark: Mark,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: Mark,
        status: Option<&str>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(
            engine.board(),
            current_turn,
            engine.last_move(),
            Some(&stats_display),
            status,
        );
        if current_turn == self.human_mark && !engine.board().is_game_over() {
            print!("Choose your next move (e.g. 'E5'): ");
        }
    }

    fn announce(&self, ending: GameEnding) -> String {
        match ending {
            GameEnding::Win(mark) if mark == self.human_mark => "You win!".to_string(),
            GameEnding::Win(_) => "Computer wins!".to_string(),
            GameEnding::Draw => "It's a draw!".to_string(),
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}
