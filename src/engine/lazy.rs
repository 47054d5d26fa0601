//! Deferred, one-time initialisation of a game's backing module.

use once_cell::sync::OnceCell;

use crate::engine::plugin::GameDescriptor;

/// A game module whose descriptor is built on first use.
///
/// Concurrent first callers block until the single loader run finishes, so
/// nobody observes a partially built descriptor.
pub struct LazyGameModule {
    cell: OnceCell<GameDescriptor>,
    loader: fn() -> GameDescriptor,
}

impl LazyGameModule {
    pub const fn new(loader: fn() -> GameDescriptor) -> Self {
        Self {
            cell: OnceCell::new(),
            loader,
        }
    }

    pub fn get(&self) -> &GameDescriptor {
        self.cell.get_or_init(|| {
            let descriptor = (self.loader)();
            tracing::debug!(game = %descriptor.kind(), "loaded game module");
            descriptor
        })
    }

    /// Whether the loader has run. Never triggers loading.
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}
