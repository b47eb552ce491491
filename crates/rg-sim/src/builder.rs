//! Fluent builder for constructing a [`Sim`].

use rg_behavior::BehaviorRegistry;
use rg_core::SimConfig;
use rg_map::TileGrid;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method         | Default                              |
/// |----------------|--------------------------------------|
/// | `.grid(g)`     | An open 32×32 floor                  |
/// | `.registry(r)` | `BehaviorRegistry::with_defaults()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::default())
///     .grid(TileGrid::from_rows(&rows)?)
///     .build()?;
/// let player = sim.spawn_player("hero", TileCoord::new(1, 1))?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    grid: Option<TileGrid>,
    registry: Option<BehaviorRegistry>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            grid: None,
            registry: None,
        }
    }

    pub fn grid(mut self, grid: TileGrid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Use a custom registry, e.g. to add behaviors beyond the stock six.
    pub fn registry(mut self, registry: BehaviorRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> SimResult<Sim> {
        let grid = self.grid.unwrap_or_else(|| TileGrid::new(32, 32));
        let registry = match self.registry {
            Some(registry) => registry,
            None => BehaviorRegistry::with_defaults()?,
        };
        Ok(Sim::new(self.config, grid, registry))
    }
}
