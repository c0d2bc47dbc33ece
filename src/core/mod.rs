pub mod handle;
pub mod spec;
pub mod target;

pub use handle::{ChartHandle, MountId};
pub use spec::{
    GraphData, GraphKind, GraphOptions, GraphSpec, ScaleSpec, SeriesSpec, TickSpec, ValueAxisSpec,
};
pub use target::{RenderTarget, Viewport};
