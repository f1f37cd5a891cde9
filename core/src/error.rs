use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid tile index")]
    InvalidTile,
    #[error("Rounds can only start while playing")]
    NotPlaying,
}

pub type Result<T> = core::result::Result<T, GameError>;
