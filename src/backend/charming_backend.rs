use charming::component::Axis;
use charming::element::AxisType;
use charming::series::Line;
use charming::{Chart, HtmlRenderer};
use indexmap::IndexMap;

use crate::backend::ChartBackend;
use crate::core::{GraphSpec, MountId, RenderTarget};
use crate::error::{GraphError, GraphResult};

/// Backend that renders each mounted graph into a standalone ECharts HTML
/// document sized to the target viewport and titled after the target id.
#[derive(Debug, Default)]
pub struct CharmingHtmlBackend {
    next_mount: u64,
    documents: IndexMap<MountId, String>,
}

impl CharmingHtmlBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered document for a live mount.
    #[must_use]
    pub fn html(&self, mount: MountId) -> Option<&str> {
        self.documents.get(&mount).map(String::as_str)
    }

    #[must_use]
    pub fn live_mounts(&self) -> usize {
        self.documents.len()
    }

    fn assemble(spec: &GraphSpec) -> Chart {
        // ECharts value axes include zero unless scale(true) lets them
        // track the data range.
        let zero_based = spec
            .options
            .scales
            .y_axes
            .iter()
            .all(|axis| axis.ticks.begin_at_zero);
        let mut y_axis = Axis::new().type_(AxisType::Value);
        if !zero_based {
            y_axis = y_axis.scale(true);
        }

        let mut chart = Chart::new()
            .x_axis(
                Axis::new()
                    .type_(AxisType::Category)
                    .data(spec.data.labels.clone()),
            )
            .y_axis(y_axis);
        for dataset in &spec.data.datasets {
            chart = chart.series(
                Line::new()
                    .name(dataset.label.clone())
                    .data(dataset.data.clone()),
            );
        }
        chart
    }
}

impl ChartBackend for CharmingHtmlBackend {
    fn mount(&mut self, target: &RenderTarget, spec: &GraphSpec) -> GraphResult<MountId> {
        spec.validate()?;

        let chart = Self::assemble(spec);
        let document = HtmlRenderer::new(
            target.id.clone(),
            u64::from(target.viewport.width),
            u64::from(target.viewport.height),
        )
        .render(&chart)
        .map_err(|e| GraphError::Backend(format!("charming render failed: {e:?}")))?;

        self.next_mount += 1;
        let mount = MountId::new(self.next_mount);
        self.documents.insert(mount, document);
        Ok(mount)
    }

    fn unmount(&mut self, mount: MountId) {
        self.documents.shift_remove(&mount);
    }
}
