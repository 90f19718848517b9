use candleview_rs::api::{ChartEngine, ChartEngineConfig, EngineSnapshot};
use candleview_rs::core::{OhlcBar, Viewport};
use candleview_rs::render::NullRenderer;
use indexmap::IndexMap;

fn engine_with_data() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let bars: Vec<OhlcBar> = (0..40)
        .map(|i| {
            let base = 50.0 + (i % 5) as f64;
            OhlcBar::new(base, base + 2.0, base - 2.0, base + 1.0).expect("valid bar")
        })
        .collect();
    engine
        .set_series(IndexMap::from([("primary".to_owned(), bars)]))
        .expect("set series");
    engine
}

#[test]
fn snapshot_reflects_the_last_drawn_frame() {
    let engine = engine_with_data();
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.viewport, Viewport::new(1000, 500));
    assert_eq!(snapshot.window.window_size, 25);
    assert!(snapshot.layout.is_some());
    assert_eq!(snapshot.series_lengths.get("primary"), Some(&40));
    // Geometry covers exactly the visible window.
    assert_eq!(snapshot.primary_geometry.len(), 25);
}

#[test]
fn snapshot_round_trips_through_json() {
    let snapshot = engine_with_data().snapshot();

    let json = snapshot.to_json().expect("snapshot to json");
    let restored = EngineSnapshot::from_json(&json).expect("snapshot from json");

    assert_eq!(restored, snapshot);
}

#[test]
fn snapshot_before_any_frame_has_no_layout() {
    let config = ChartEngineConfig::new(Viewport::new(1000, 500));
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");

    let snapshot = engine.snapshot();
    assert!(snapshot.layout.is_none());
    assert!(snapshot.primary_geometry.is_empty());
}

#[test]
fn malformed_snapshot_json_is_rejected() {
    assert!(EngineSnapshot::from_json("{not json").is_err());
}
