use candleview_rs::ChartError;
use candleview_rs::core::{OhlcBar, PriceScale, ScaleTuning, SeriesSet, ViewWindow};
use indexmap::IndexMap;

fn single_series(bars: Vec<OhlcBar>) -> SeriesSet {
    let mut set = SeriesSet::new();
    set.replace_all(IndexMap::from([("primary".to_owned(), bars)]));
    set
}

#[test]
fn padding_is_asymmetric_two_below_one_above() {
    let bars = vec![OhlcBar::new(50.0, 60.0, 40.0, 55.0).expect("valid bar")];
    let series = single_series(bars);

    let scale = PriceScale::fit_visible(&series, ViewWindow::new(0, 25), ScaleTuning::default())
        .expect("scale fit");

    assert!((scale.padding() - 1.0).abs() <= 1e-12);
    assert!((scale.min() - 38.0).abs() <= 1e-12);
    assert!((scale.max() - 61.0).abs() <= 1e-12);
}

#[test]
fn scale_is_monotone_when_bars_are_visible() {
    let bars = vec![
        OhlcBar::new(10.0, 12.0, 9.0, 11.0).expect("valid bar"),
        OhlcBar::new(11.0, 14.0, 10.0, 13.0).expect("valid bar"),
    ];
    let series = single_series(bars);

    let scale = PriceScale::fit_visible(&series, ViewWindow::new(0, 25), ScaleTuning::default())
        .expect("scale fit");

    assert!(scale.min() < scale.max());
    assert!(scale.span() > 0.0);
}

#[test]
fn empty_window_is_insufficient_data() {
    let series = single_series(Vec::new());

    let result = PriceScale::fit_visible(&series, ViewWindow::new(0, 25), ScaleTuning::default());

    match result {
        Err(ChartError::InsufficientData {
            start_index,
            window_size,
        }) => {
            assert_eq!(start_index, 0);
            assert_eq!(window_size, 25);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn window_past_series_end_is_insufficient_data() {
    let bars = vec![OhlcBar::new(10.0, 12.0, 9.0, 11.0).expect("valid bar")];
    let series = single_series(bars);

    let result = PriceScale::fit_visible(&series, ViewWindow::new(5, 25), ScaleTuning::default());
    assert!(matches!(result, Err(ChartError::InsufficientData { .. })));
}

#[test]
fn degenerate_price_range_gets_minimum_padding() {
    let bars = vec![
        OhlcBar::new(50.0, 50.0, 50.0, 50.0).expect("valid bar"),
        OhlcBar::new(50.0, 50.0, 50.0, 50.0).expect("valid bar"),
    ];
    let series = single_series(bars);

    let scale = PriceScale::fit_visible(&series, ViewWindow::new(0, 25), ScaleTuning::default())
        .expect("scale fit");

    assert!((scale.padding() - 1.0).abs() <= 1e-12);
    assert!((scale.min() - 48.0).abs() <= 1e-12);
    assert!((scale.max() - 51.0).abs() <= 1e-12);
    assert!(scale.span() > 0.0);
}

#[test]
fn scale_spans_extremes_of_all_series() {
    let mut set = SeriesSet::new();
    set.replace_all(IndexMap::from([
        (
            "a".to_owned(),
            vec![OhlcBar::new(50.0, 60.0, 40.0, 55.0).expect("valid bar")],
        ),
        (
            "b".to_owned(),
            vec![OhlcBar::new(75.0, 80.0, 70.0, 78.0).expect("valid bar")],
        ),
    ]));

    let scale = PriceScale::fit_visible(&set, ViewWindow::new(0, 25), ScaleTuning::default())
        .expect("scale fit");

    // Range is 40..80, so padding is 2, min 36, max 82.
    assert!((scale.padding() - 2.0).abs() <= 1e-12);
    assert!((scale.min() - 36.0).abs() <= 1e-12);
    assert!((scale.max() - 82.0).abs() <= 1e-12);
}

#[test]
fn bars_outside_window_do_not_affect_scale() {
    let mut bars: Vec<OhlcBar> = (0..30)
        .map(|_| OhlcBar::new(50.0, 60.0, 40.0, 55.0).expect("valid bar"))
        .collect();
    bars.push(OhlcBar::new(500.0, 900.0, 400.0, 600.0).expect("valid bar"));
    let series = single_series(bars);

    let scale = PriceScale::fit_visible(&series, ViewWindow::new(0, 25), ScaleTuning::default())
        .expect("scale fit");

    assert!((scale.max() - 61.0).abs() <= 1e-12);
}

#[test]
fn invalid_tuning_is_rejected() {
    let bars = vec![OhlcBar::new(10.0, 12.0, 9.0, 11.0).expect("valid bar")];
    let series = single_series(bars);

    let negative_portion = ScaleTuning {
        padding_portion: -0.1,
        min_padding_absolute: 1.0,
    };
    assert!(PriceScale::fit_visible(&series, ViewWindow::new(0, 25), negative_portion).is_err());

    let zero_min_padding = ScaleTuning {
        padding_portion: 0.05,
        min_padding_absolute: 0.0,
    };
    assert!(PriceScale::fit_visible(&series, ViewWindow::new(0, 25), zero_min_padding).is_err());
}
