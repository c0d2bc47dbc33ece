use std::collections::HashSet;

use loupe_graph::backend::RecordingBackend;
use loupe_graph::core::{GraphSpec, Viewport};
use loupe_graph::host::MemoryHost;
use loupe_graph::{GraphAdapter, GraphError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn matched_series_round_trip_property(
        points in proptest::collection::vec(("[a-z]{1,8}", -1_000_000.0f64..1_000_000.0), 0..64)
    ) {
        let (labels, values): (Vec<String>, Vec<f64>) = points.into_iter().unzip();

        let spec = GraphSpec::line("Throughput", labels, values).expect("matched lengths");
        let text = spec.to_json_pretty().expect("serialize");
        let parsed = GraphSpec::from_json_str(&text).expect("parse");

        prop_assert_eq!(parsed, spec);
    }

    #[test]
    fn mismatched_series_are_always_rejected(
        labels in proptest::collection::vec("[a-z]{1,8}", 0..32),
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 0..32)
    ) {
        prop_assume!(labels.len() != values.len());
        let label_count = labels.len();
        let value_count = values.len();

        let err = GraphSpec::line("Throughput", labels, values).expect_err("mismatch must fail");
        prop_assert!(
            matches!(
                err,
                GraphError::SeriesMismatch { labels, values }
                    if labels == label_count && values == value_count
            ),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn mount_ids_stay_unique_over_many_draws(draws in 1usize..40) {
        let mut host = MemoryHost::new();
        host.register_target("chart1", Viewport::new(640, 240)).expect("register target");
        let mut adapter = GraphAdapter::new(RecordingBackend::new());

        let mut seen = HashSet::new();
        for i in 0..draws {
            let handle = adapter
                .draw_graph(&host, "chart1", vec![format!("t{i}")], vec![i as f64])
                .expect("draw");
            prop_assert!(seen.insert(handle.mount_id()));
            adapter.destroy_chart(handle);
        }
        prop_assert_eq!(adapter.backend().live_mounts(), 0);
    }
}
