use indexmap::{IndexMap, IndexSet};

use crate::backend::ChartBackend;
use crate::core::{GraphSpec, MountId, RenderTarget};
use crate::error::{GraphError, GraphResult};

/// What one mount call delivered to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MountRecord {
    pub target_id: String,
    pub spec: GraphSpec,
}

/// No-op backend used by tests and headless adapter usage.
///
/// It still validates each received spec so tests catch inconsistent series
/// before a real backend is involved. Mounts are recorded in creation order
/// and kept after release; unmount calls are counted per id, including ids
/// the backend never issued.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_mount: u64,
    records: IndexMap<MountId, MountRecord>,
    live: IndexSet<MountId>,
    unmounts: IndexMap<MountId, usize>,
    fail_mounts: bool,
}

impl RecordingBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects every mount, for fault-propagation tests.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_mounts: true,
            ..Self::default()
        }
    }

    /// Total mounts ever performed.
    #[must_use]
    pub fn mount_count(&self) -> usize {
        self.records.len()
    }

    /// Mounts that have not been released yet.
    #[must_use]
    pub fn live_mounts(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn record(&self, mount: MountId) -> Option<&MountRecord> {
        self.records.get(&mount)
    }

    /// How many times `unmount` was called for this id.
    #[must_use]
    pub fn unmount_calls(&self, mount: MountId) -> usize {
        self.unmounts.get(&mount).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_unmount_calls(&self) -> usize {
        self.unmounts.values().sum()
    }
}

impl ChartBackend for RecordingBackend {
    fn mount(&mut self, target: &RenderTarget, spec: &GraphSpec) -> GraphResult<MountId> {
        if self.fail_mounts {
            return Err(GraphError::Backend(
                "mount rejected by recording backend".to_owned(),
            ));
        }
        spec.validate()?;

        self.next_mount += 1;
        let mount = MountId::new(self.next_mount);
        self.records.insert(
            mount,
            MountRecord {
                target_id: target.id.clone(),
                spec: spec.clone(),
            },
        );
        self.live.insert(mount);
        Ok(mount)
    }

    fn unmount(&mut self, mount: MountId) {
        self.live.shift_remove(&mount);
        *self.unmounts.entry(mount).or_insert(0) += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingBackend;
    use crate::backend::ChartBackend;
    use crate::core::{GraphSpec, MountId, RenderTarget, Viewport};
    use crate::error::GraphError;

    fn target() -> RenderTarget {
        RenderTarget::new("chart1", Viewport::new(320, 240))
    }

    fn spec() -> GraphSpec {
        GraphSpec::line("Throughput", vec!["a".to_owned()], vec![1.0]).expect("spec")
    }

    #[test]
    fn failing_backend_rejects_mounts() {
        let mut backend = RecordingBackend::failing();
        let err = backend.mount(&target(), &spec()).expect_err("must fail");
        assert!(matches!(err, GraphError::Backend(_)));
        assert_eq!(backend.mount_count(), 0);
    }

    #[test]
    fn unmounting_unknown_ids_is_counted_without_panicking() {
        let mut backend = RecordingBackend::new();
        let unknown = MountId::new(42);
        backend.unmount(unknown);
        backend.unmount(unknown);
        assert_eq!(backend.unmount_calls(unknown), 2);
        assert_eq!(backend.live_mounts(), 0);
    }
}
