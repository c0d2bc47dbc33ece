#![cfg(feature = "charming-backend")]

use loupe_graph::GraphAdapter;
use loupe_graph::backend::CharmingHtmlBackend;
use loupe_graph::core::Viewport;
use loupe_graph::host::MemoryHost;

#[test]
fn mounted_graph_renders_an_echarts_document() {
    let mut host = MemoryHost::new();
    host.register_target("chart1", Viewport::new(640, 240))
        .expect("register target");
    let mut adapter = GraphAdapter::new(CharmingHtmlBackend::new());

    let handle = adapter
        .draw_graph(
            &host,
            "chart1",
            vec!["10:00".to_owned(), "10:01".to_owned()],
            vec![120.0, 134.0],
        )
        .expect("draw");

    let mount = handle.mount_id();
    let html = adapter.backend().html(mount).expect("document rendered");
    assert!(html.contains("Throughput"));
    assert!(html.contains("chart1"));

    adapter.destroy_chart(handle);
    assert_eq!(adapter.backend().live_mounts(), 0);
    assert!(adapter.backend().html(mount).is_none());
}
