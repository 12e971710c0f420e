use log::info;

use crate::board::Mark;
use crate::evaluate::GameEnding;
use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::InputError;

pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
    current_turn: Mark,
    status: Option<String>,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig, first_turn: Mark) -> Self {
        Self {
            engine: Engine::with_config(config),
            ui: GameDisplay::new(),
            input_source,
            renderer,
            current_turn: first_turn,
            status: None,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Why the last attempted move was rejected, shown in the next frame.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    fn render(&mut self) {
        self.renderer.render(
            &mut self.ui,
            &self.engine,
            self.current_turn,
            self.status.as_deref(),
        );
    }

    /// Plays until the game ends, returning the ending, or `None` if the
    /// player quits.
    pub fn run(&mut self) -> Option<GameEnding> {
        loop {
            if let Some(ending) = self.engine.check_game_over() {
                self.render();
                println!("{}", self.renderer.announce(ending));
                info!("game over: {}", ending);
                return Some(ending);
            }

            self.render();

            match self.input_source.get_move(self.current_turn) {
                Ok(Some(input)) => match self.engine.make_move_from_input(input, self.current_turn) {
                    Ok(_) => {
                        self.status = None;
                        self.current_turn = self.current_turn.opposite();
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => self.status = Some(format!("{}. Try again.", error)),
                },
                Ok(None) => self.status = Some("Invalid move. Try again (e.g. 'E5')".to_string()),
                Err(InputError::UserExit) => return None,
                Err(error) => self.status = Some(format!("error: {}", error)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::board::Position;
    use crate::game::input_source::EngineInput;
    use crate::game::renderer::StatsRenderer;
    use crate::input_handler::MoveInput;
    use std::cell::RefCell;
    use std::time::Duration;

    /// Replays fixed moves, then quits.
    struct ScriptedInput {
        moves: RefCell<Vec<MoveInput>>,
    }

    impl ScriptedInput {
        fn new(tokens: &[&str]) -> Self {
            let mut moves: Vec<MoveInput> =
                tokens.iter().map(|token| token.parse().unwrap()).collect();
            moves.reverse();
            Self {
                moves: RefCell::new(moves),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn get_move(&self, _current_turn: Mark) -> Result<Option<MoveInput>, InputError> {
            self.moves
                .borrow_mut()
                .pop()
                .map(Some)
                .ok_or(InputError::UserExit)
        }
    }

    fn scripted_game(tokens: &[&str]) -> GameLoop<ScriptedInput, StatsRenderer> {
        GameLoop::new(
            ScriptedInput::new(tokens),
            StatsRenderer {
                delay_between_moves: None,
            },
            EngineConfig::default(),
            Mark::X,
        )
    }

    #[test]
    fn test_rejected_move_is_kept_for_next_frame() {
        let mut game = scripted_game(&["A1", "A1"]);

        assert_eq!(None, game.run());
        let status = game.status().unwrap();
        assert!(status.contains("A1"), "{}", status);
        assert!(status.ends_with("Try again."), "{}", status);
        assert_eq!(&[(Position::new(0, 0), Mark::X)], game.engine().move_history());
    }

    #[test]
    fn test_same_side_retries_and_status_clears() {
        let mut game = scripted_game(&["A1", "A1", "B2"]);

        assert_eq!(None, game.run());
        assert_eq!(None, game.status());
        assert_eq!(
            &[
                (Position::new(0, 0), Mark::X),
                (Position::new(1, 1), Mark::O)
            ],
            game.engine().move_history()
        );
    }

    #[test]
    fn test_computer_vs_computer_runs_to_an_ending() {
        let config = EngineConfig {
            search_depth: 1,
            time_limit: Duration::from_secs(60),
            computer_mark: Mark::X,
            starting_position: Board::new(),
        };
        let mut game = GameLoop::new(
            EngineInput,
            StatsRenderer {
                delay_between_moves: None,
            },
            config,
            Mark::X,
        );

        let ending = game.run();

        assert!(ending.is_some());
        assert!(game.engine().board().is_game_over());
        let history = game.engine().move_history();
        assert!(!history.is_empty());
        assert!(history
            .windows(2)
            .all(|pair| pair[0].1 == pair[1].1.opposite()));
    }
}
