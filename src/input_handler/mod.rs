pub mod input;
pub mod notation;

pub use input::{parse_move_input, InputError, MoveInput};
