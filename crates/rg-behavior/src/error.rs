use rg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A blueprint or save file named a behavior nobody registered.
    #[error("no behavior registered under {0:?}")]
    Unknown(String),

    /// The same name registered twice.  Fatal at startup: a silent overwrite
    /// would make NPC decisions depend on registration order.
    #[error("behavior {0:?} registered twice")]
    Duplicate(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
