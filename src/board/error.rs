use thiserror::Error;

use super::Position;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot place a mark on {position}, the cell is already occupied")]
    CellOccupied { position: Position },
}
