use ns_core::CoreError;
use ns_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("{what} count {got} does not match configured {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
