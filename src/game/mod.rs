pub mod display;
pub mod engine;
pub mod first_player;
pub mod input_source;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod renderer;
