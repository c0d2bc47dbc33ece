use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Chart kinds understood by backends. Only line graphs exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Line,
}

/// One named sequence of values plotted against the shared labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub data: Vec<f64>,
}

/// Category labels plus the datasets drawn against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickSpec {
    #[serde(rename = "beginAtZero")]
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueAxisSpec {
    pub ticks: TickSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSpec {
    #[serde(rename = "yAxes")]
    pub y_axes: Vec<ValueAxisSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    pub scales: ScaleSpec,
}

impl GraphOptions {
    /// Options block requesting zero-based vertical axis scaling.
    #[must_use]
    pub fn zero_based() -> Self {
        Self {
            scales: ScaleSpec {
                y_axes: vec![ValueAxisSpec {
                    ticks: TickSpec {
                        begin_at_zero: true,
                    },
                }],
            },
        }
    }
}

/// Declarative description of one chart.
///
/// The serialized form is the configuration object charting backends consume,
/// so the serde renames below (`type`, `yAxes`, `beginAtZero`) are part of the
/// wire contract, not cosmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSpec {
    #[serde(rename = "type")]
    pub kind: GraphKind,
    pub data: GraphData,
    pub options: GraphOptions,
}

impl GraphSpec {
    /// Builds a single-series line spec with zero-based vertical scaling.
    ///
    /// `labels` and `values` must have equal length; mismatches are rejected
    /// rather than padded or passed through.
    pub fn line(
        series_label: impl Into<String>,
        labels: Vec<String>,
        values: Vec<f64>,
    ) -> GraphResult<Self> {
        if labels.len() != values.len() {
            return Err(GraphError::SeriesMismatch {
                labels: labels.len(),
                values: values.len(),
            });
        }

        Ok(Self {
            kind: GraphKind::Line,
            data: GraphData {
                labels,
                datasets: vec![SeriesSpec {
                    label: series_label.into(),
                    data: values,
                }],
            },
            options: GraphOptions::zero_based(),
        })
    }

    /// Re-checks structural consistency of a hand-assembled spec.
    ///
    /// Every dataset must carry exactly one value per label.
    pub fn validate(&self) -> GraphResult<()> {
        for dataset in &self.data.datasets {
            if dataset.data.len() != self.data.labels.len() {
                return Err(GraphError::SeriesMismatch {
                    labels: self.data.labels.len(),
                    values: dataset.data.len(),
                });
            }
        }
        Ok(())
    }

    /// Serializes the spec to pretty wire-shape JSON.
    pub fn to_json_pretty(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize graph spec: {e}")))
    }

    /// Deserializes a spec from wire-shape JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse graph spec: {e}")))
    }
}
