mod recording_backend;

pub use recording_backend::{MountRecord, RecordingBackend};

#[cfg(feature = "charming-backend")]
mod charming_backend;
#[cfg(feature = "charming-backend")]
pub use charming_backend::CharmingHtmlBackend;

use crate::core::{GraphSpec, MountId, RenderTarget};
use crate::error::GraphResult;

/// Contract implemented by any charting backend.
///
/// Backends receive a resolved target and a fully materialized [`GraphSpec`],
/// keep ownership of whatever they mount, and hand back an opaque mount id
/// the adapter wraps into a chart handle.
pub trait ChartBackend {
    /// Constructs a visualization from `spec` and mounts it onto `target`.
    fn mount(&mut self, target: &RenderTarget, spec: &GraphSpec) -> GraphResult<MountId>;

    /// Releases one mounted visualization and detaches it.
    ///
    /// Disposing an id the backend no longer knows is backend-defined; no
    /// validity check is imposed here.
    fn unmount(&mut self, mount: MountId);
}
