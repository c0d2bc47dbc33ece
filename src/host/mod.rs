mod memory_host;

pub use memory_host::MemoryHost;

use crate::core::RenderTarget;

/// Contract implemented by any rendering environment.
///
/// Hosts expose element lookup by identifier so the adapter stays isolated
/// from how targets are laid out and owned. They are externally owned and
/// borrowed per call.
pub trait RenderHost {
    /// Resolves a target identifier to a mount point descriptor.
    fn resolve_target(&self, target_id: &str) -> Option<RenderTarget>;
}
