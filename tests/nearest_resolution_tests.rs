use chrono::NaiveDate;
use rent_chart::api::{ChartEngineConfig, ChartState, nearest_by_time};
use rent_chart::core::{DataPoint, RentSeries, date_to_day_number};
use rent_chart::error::ChartError;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn state(points: Vec<DataPoint>) -> ChartState {
    ChartState::new(RentSeries::new(points), ChartEngineConfig::default()).expect("chart state")
}

fn jan_mar_jun_state() -> ChartState {
    state(vec![
        DataPoint::new(date(2023, 1, 1), 120_000.0),
        DataPoint::new(date(2023, 3, 1), 150_000.0),
        DataPoint::new(date(2023, 6, 1), 165_000.0),
    ])
}

#[test]
fn hovering_february_first_resolves_to_march() {
    let state = jan_mar_jun_state();
    let pixel = state
        .time_scale()
        .date_to_pixel(date(2023, 2, 1))
        .expect("pixel");

    let nearest = state.resolve_nearest(pixel).expect("resolve");
    assert_eq!(nearest, DataPoint::new(date(2023, 3, 1), 150_000.0));
}

#[test]
fn hovering_exact_sample_returns_it() {
    let state = jan_mar_jun_state();
    for point in state.series().points() {
        let pixel = state.time_scale().date_to_pixel(point.date).expect("pixel");
        assert_eq!(state.resolve_nearest(pixel).expect("resolve"), *point);
    }
}

#[test]
fn plot_edges_resolve_to_first_and_last_points() {
    let state = jan_mar_jun_state();
    let width = state.plot_area().width;

    let first = state.resolve_nearest(0.0).expect("left edge");
    let last = state.resolve_nearest(width).expect("right edge");
    assert_eq!(first.date, date(2023, 1, 1));
    assert_eq!(last.date, date(2023, 6, 1));
}

#[test]
fn positions_outside_plot_resolve_to_boundary_points() {
    let state = jan_mar_jun_state();
    let width = state.plot_area().width;

    assert_eq!(
        state.resolve_nearest(-500.0).expect("far left").date,
        date(2023, 1, 1)
    );
    assert_eq!(
        state.resolve_nearest(width + 500.0).expect("far right").date,
        date(2023, 6, 1)
    );
}

#[test]
fn clamped_pointer_inverts_to_domain_edges() {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 1.0),
        DataPoint::new(date(2023, 2, 1), 2.0),
    ]);
    let config = ChartEngineConfig::default().with_pointer_clamp(true);
    let state = ChartState::new(series, config).expect("chart state");

    let pointer = state.resolve_pointer(-100.0).expect("resolve");
    assert_eq!(pointer.inverted_time, date_to_day_number(date(2023, 1, 1)));
    assert_eq!(pointer.nearest_index, 0);
}

#[test]
fn equal_distance_resolves_to_earlier_point() {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 10.0),
        DataPoint::new(date(2023, 1, 3), 30.0),
    ]);
    let midpoint = date_to_day_number(date(2023, 1, 2));

    let (index, point) = nearest_by_time(&series, midpoint).expect("resolve");
    assert_eq!(index, 0);
    assert_eq!(point.date, date(2023, 1, 1));

    let (index, _) = nearest_by_time(&series, midpoint + 1e-6).expect("resolve");
    assert_eq!(index, 1);
}

#[test]
fn single_point_dataset_always_resolves_to_it() {
    let only = DataPoint::new(date(2023, 3, 1), 150_000.0);
    let state = state(vec![only]);
    let width = state.plot_area().width;

    for pixel in [-50.0, 0.0, width / 3.0, width, width * 2.0] {
        assert_eq!(state.resolve_nearest(pixel).expect("resolve"), only);
    }
}

#[test]
fn resolve_pointer_reports_index_and_inverted_time() {
    let state = jan_mar_jun_state();
    let pixel = state
        .time_scale()
        .date_to_pixel(date(2023, 5, 20))
        .expect("pixel");

    let pointer = state.resolve_pointer(pixel).expect("resolve");
    assert_eq!(pointer.nearest_index, 2);
    assert_eq!(pointer.pixel_x, pixel);
    assert!((pointer.inverted_time - date_to_day_number(date(2023, 5, 20))).abs() < 1e-6);
}

#[test]
fn empty_dataset_is_an_error() {
    let err = ChartState::new(RentSeries::default(), ChartEngineConfig::default())
        .expect_err("empty dataset");
    assert!(matches!(err, ChartError::EmptyDataset));

    let err = nearest_by_time(&RentSeries::default(), 0.0).expect_err("empty dataset");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn non_finite_pointer_is_rejected() {
    let state = jan_mar_jun_state();
    assert!(matches!(
        state.resolve_nearest(f64::NAN),
        Err(ChartError::InvalidData(_))
    ));
    assert!(state.resolve_nearest(f64::INFINITY).is_err());
}
