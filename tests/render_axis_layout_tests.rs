use approx::assert_abs_diff_eq;
use candleview_rs::api::layout_axes;
use candleview_rs::core::{FrameLayout, OhlcBar, PriceScale, Viewport};
use candleview_rs::render::TextHAlign;
use chrono::NaiveDate;

fn reference_layout() -> FrameLayout {
    // alpha = 20, x_padding = 20, body_width = 35.68, slot advance = 37.68.
    let scale = PriceScale::new(38.0, 61.0, 1.0).expect("valid scale");
    FrameLayout::compute(Viewport::new(1000, 460), scale, 25, 2.0).expect("layout")
}

fn dated_bars(count: usize) -> Vec<OhlcBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (0..count)
        .map(|i| {
            OhlcBar::new(50.0, 60.0, 40.0, 55.0)
                .expect("valid bar")
                .with_date(start + chrono::Duration::days(i as i64))
        })
        .collect()
}

#[test]
fn price_axis_line_and_ticks_frame_the_chart() {
    let axis = layout_axes(reference_layout(), &dated_bars(12), 0, 10);

    assert_abs_diff_eq!(axis.y_axis.x1, 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(axis.y_axis.y1, 20.0, epsilon = 1e-12);
    assert_abs_diff_eq!(axis.y_axis.x2, 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(axis.y_axis.y2, 420.0, epsilon = 1e-12);

    assert_eq!(axis.y_ticks.len(), 11);
    // dy = (460 - 60) / 10 = 40; tick i sits at 420 - 40i and points left.
    for (i, tick) in axis.y_ticks.iter().enumerate() {
        assert_abs_diff_eq!(tick.y1, 420.0 - 40.0 * i as f64, epsilon = 1e-12);
        assert_abs_diff_eq!(tick.x1, 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tick.x2, 35.0, epsilon = 1e-12);
    }
}

#[test]
fn price_labels_run_from_lowest_low_to_highest_high() {
    let axis = layout_axes(reference_layout(), &dated_bars(12), 0, 10);

    assert_eq!(axis.y_labels.len(), 11);
    // Visible lows/highs were 40..60, so labels step by 2 from 40.00.
    for (i, label) in axis.y_labels.iter().enumerate() {
        assert_eq!(label.text, format!("{:.2}", 40.0 + 2.0 * i as f64));
        assert_abs_diff_eq!(label.x, 30.0, epsilon = 1e-12);
        assert_abs_diff_eq!(label.y, 420.0 - 40.0 * i as f64, epsilon = 1e-12);
        assert_eq!(label.h_align, TextHAlign::Right);
    }
}

#[test]
fn time_axis_ticks_per_bar_with_longer_fifth_ticks() {
    let axis = layout_axes(reference_layout(), &dated_bars(12), 0, 10);

    assert_abs_diff_eq!(axis.x_axis.y1, 420.0, epsilon = 1e-12);
    assert_abs_diff_eq!(axis.x_axis.x1, 40.0, epsilon = 1e-12);
    assert_abs_diff_eq!(axis.x_axis.x2, 985.0, epsilon = 1e-12);

    assert_eq!(axis.x_ticks.len(), 12);
    for (i, tick) in axis.x_ticks.iter().enumerate() {
        assert_abs_diff_eq!(tick.x1, 50.0 + 37.68 * i as f64, epsilon = 1e-12);
        assert_abs_diff_eq!(tick.y1, 420.0, epsilon = 1e-12);
        let expected_len = if i % 5 == 0 { 10.0 } else { 4.0 };
        assert_abs_diff_eq!(tick.y2 - tick.y1, expected_len, epsilon = 1e-12);
    }
}

#[test]
fn date_labels_appear_on_every_fifth_bar() {
    let axis = layout_axes(reference_layout(), &dated_bars(12), 0, 10);

    assert_eq!(axis.x_labels.len(), 3);
    let texts: Vec<&str> = axis.x_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["01-01", "01-06", "01-11"]);

    for (n, label) in axis.x_labels.iter().enumerate() {
        let i = (n * 5) as f64;
        assert_abs_diff_eq!(label.x, 50.0 + 37.68 * i - 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(label.y, 440.0, epsilon = 1e-12);
        assert_eq!(label.h_align, TextHAlign::Center);
    }
}

#[test]
fn undated_bars_label_with_their_absolute_index() {
    let bars: Vec<OhlcBar> = (0..12)
        .map(|_| OhlcBar::new(50.0, 60.0, 40.0, 55.0).expect("valid bar"))
        .collect();

    let axis = layout_axes(reference_layout(), &bars, 7, 10);

    let texts: Vec<&str> = axis.x_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["7", "12", "17"]);
}

#[test]
fn empty_visible_slice_still_produces_axes() {
    let axis = layout_axes(reference_layout(), &[], 0, 10);

    assert!(axis.x_ticks.is_empty());
    assert!(axis.x_labels.is_empty());
    assert_eq!(axis.y_labels.len(), 11);
}
