use indexmap::IndexMap;

use crate::core::{RenderTarget, Viewport};
use crate::error::{GraphError, GraphResult};
use crate::host::RenderHost;

/// In-memory rendering environment for tests and headless embedding.
///
/// Targets are kept in registration order so listing stays deterministic.
#[derive(Debug, Default)]
pub struct MemoryHost {
    targets: IndexMap<String, Viewport>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named target. Identifiers are unique; re-registering an
    /// id replaces the previous target.
    pub fn register_target(
        &mut self,
        target_id: impl Into<String>,
        viewport: Viewport,
    ) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.targets.insert(target_id.into(), viewport);
        Ok(())
    }

    /// Removes a target, returning whether it existed.
    pub fn remove_target(&mut self, target_id: &str) -> bool {
        self.targets.shift_remove(target_id).is_some()
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn target_ids(&self) -> impl Iterator<Item = &str> {
        self.targets.keys().map(String::as_str)
    }
}

impl RenderHost for MemoryHost {
    fn resolve_target(&self, target_id: &str) -> Option<RenderTarget> {
        self.targets
            .get(target_id)
            .map(|viewport| RenderTarget::new(target_id, *viewport))
    }
}
