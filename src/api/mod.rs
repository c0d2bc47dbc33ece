mod diagnostics;

pub use diagnostics::{ArgProbe, show_arg, show_arg_to};

use tracing::debug;

use crate::backend::ChartBackend;
use crate::core::{ChartHandle, GraphSpec};
use crate::error::{GraphError, GraphResult};
use crate::host::RenderHost;

/// Series label applied to every drawn throughput graph.
pub const THROUGHPUT_SERIES_LABEL: &str = "Throughput";

/// Facade binding a charting backend to named render targets.
///
/// The adapter owns the backend and borrows the host per call. It holds no
/// chart state of its own: every mounted visualization is represented by the
/// `ChartHandle` returned to the caller, and destroying a chart consumes that
/// handle.
pub struct GraphAdapter<B: ChartBackend> {
    backend: B,
}

impl<B: ChartBackend> GraphAdapter<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Draws a throughput line graph into the target named by `target_id`.
    ///
    /// The graph plots `values` against `labels` as a single series with a
    /// zero-based value axis. Fails with `TargetNotFound` when the host does
    /// not know the target and with `SeriesMismatch` when the two sequences
    /// differ in length; backend faults propagate unmodified.
    pub fn draw_graph<H: RenderHost>(
        &mut self,
        host: &H,
        target_id: &str,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> GraphResult<ChartHandle> {
        let target = host
            .resolve_target(target_id)
            .ok_or_else(|| GraphError::TargetNotFound {
                target_id: target_id.to_owned(),
            })?;

        let spec = GraphSpec::line(THROUGHPUT_SERIES_LABEL, labels, values)?;
        let mount = self.backend.mount(&target, &spec)?;
        debug!(
            target_id,
            mount = mount.value(),
            points = spec.data.labels.len(),
            "mounted throughput graph"
        );
        Ok(ChartHandle::new(mount))
    }

    /// Tears down a previously drawn chart and releases its resources.
    pub fn destroy_chart(&mut self, handle: ChartHandle) {
        let mount = handle.into_mount();
        self.backend.unmount(mount);
        debug!(mount = mount.value(), "unmounted graph");
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }
}
