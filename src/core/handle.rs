/// Backend-scoped identifier of one mounted visualization.
///
/// Ids are issued by the backend that performed the mount and are never
/// reused within a backend's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Opaque handle to a live, mounted visualization.
///
/// The handle belongs to the caller of the draw operation; the adapter keeps
/// no copy. Destroying the chart consumes the handle, so a destroyed chart
/// cannot be referenced again.
#[must_use = "a chart handle keeps its visualization mounted until destroyed"]
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    mount: MountId,
}

impl ChartHandle {
    pub(crate) fn new(mount: MountId) -> Self {
        Self { mount }
    }

    /// The backend mount this handle refers to.
    #[must_use]
    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub(crate) fn into_mount(self) -> MountId {
        self.mount
    }
}
