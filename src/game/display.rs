use crate::board::{Board, Mark, Position};
use termion::{clear, cursor};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Builds one frame without printing it.
    pub fn compose_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<(Position, Mark)>,
        stats: Option<&str>,
        status: Option<&str>,
    ) {
        self.buffer.push_str(&board.to_string());
        self.buffer.push('\n');

        if let Some((position, mark)) = last_move {
            self.buffer
                .push_str(&format!("Last move: {} played {}\n", mark, position));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }

        if let Some(status) = status {
            self.buffer.push_str(&format!("\n{}\n", status));
        }

        if !board.is_game_over() {
            self.buffer.push_str(&format!("Turn: {}\n", current_turn));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Mark,
        last_move: Option<(Position, Mark)>,
        stats: Option<&str>,
        status: Option<&str>,
    ) {
        self.clear();
        self.compose_game_state(board, current_turn, last_move, stats, status);

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}
