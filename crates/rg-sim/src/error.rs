use rg_actor::error::ActorError;
use rg_behavior::BehaviorError;
use rg_combat::CombatError;
use rg_core::CoreError;
use rg_map::error::MapError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Actor(#[from] ActorError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("save file: {0}")]
    Save(#[from] serde_json::Error),

    /// The map has no open tile left to spawn on.
    #[error("no open tile to spawn on")]
    NoSpawnTile,
}

pub type SimResult<T> = Result<T, SimError>;
