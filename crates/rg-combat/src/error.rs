use rg_core::ActorId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombatError {
    #[error("actor {0} no longer exists")]
    UnknownActor(ActorId),
}

pub type CombatResult<T> = Result<T, CombatError>;
