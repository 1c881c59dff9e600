use ns_core::HouseId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("house {0} not found")]
    HouseNotFound(HouseId),

    #[error("world generation error: {0}")]
    Generation(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
