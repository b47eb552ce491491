use rg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActorError {
    #[error("blueprint CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("duplicate blueprint name {0:?}")]
    DuplicateBlueprint(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ActorResult<T> = Result<T, ActorError>;
