use rg_core::TileCoord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(TileCoord),

    #[error("tile {0} is already occupied")]
    TileOccupied(TileCoord),

    #[error("ASCII map rows have unequal lengths")]
    RaggedRows,
}

pub type MapResult<T> = Result<T, MapError>;
