use approx::assert_relative_eq;
use chrono::NaiveDate;
use rent_chart::core::{
    DataPoint, LinearScale, PlotArea, PlotMargins, RentScale, RentSeries, TimeScale, Viewport,
    date_to_day_number, day_number_to_date, project_line_path,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert_relative_eq!(px, 325.0, epsilon = 1e-9);
    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn linear_scale_rejects_degenerate_domain_and_range() {
    assert!(LinearScale::new(1.0, 1.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, 1.0, 50.0, 50.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 100.0).is_err());
}

#[test]
fn linear_scale_extrapolates_unless_clamped() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("valid scale");
    assert_relative_eq!(scale.pixel_to_domain(150.0).expect("invert"), 15.0);

    let clamped = scale.with_clamp(true);
    assert!(clamped.is_clamped());
    assert_relative_eq!(clamped.pixel_to_domain(150.0).expect("invert"), 10.0);
    assert_relative_eq!(clamped.domain_to_pixel(-5.0).expect("forward"), 0.0);
}

#[test]
fn linear_scale_rejects_non_finite_inputs() {
    let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
    assert!(scale.pixel_to_domain(f64::NAN).is_err());
}

#[test]
fn day_numbers_count_from_unix_epoch() {
    assert_eq!(date_to_day_number(date(1970, 1, 1)), 0.0);
    assert_eq!(date_to_day_number(date(2023, 1, 1)), 19_358.0);
    assert_eq!(day_number_to_date(19_358.75), Some(date(2023, 1, 1)));
}

#[test]
fn time_scale_maps_extent_to_plot_width() {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 100.0),
        DataPoint::new(date(2023, 6, 1), 200.0),
    ]);
    let scale = TimeScale::from_series(&series, 500.0).expect("time scale");

    assert_eq!(scale.date_to_pixel(date(2023, 1, 1)).expect("left"), 0.0);
    assert_relative_eq!(
        scale.date_to_pixel(date(2023, 6, 1)).expect("right"),
        500.0,
        epsilon = 1e-9
    );
    assert_eq!(
        scale.domain_dates(),
        Some((date(2023, 1, 1), date(2023, 6, 1)))
    );
}

#[test]
fn time_scale_inverts_to_fractional_days() {
    let scale = TimeScale::new(0.0, 10.0, 100.0).expect("time scale");
    assert_relative_eq!(scale.pixel_to_time(25.0).expect("invert"), 2.5);

    let at = scale.pixel_to_datetime(25.0).expect("datetime");
    assert_eq!(at.date(), date(1970, 1, 3));
}

#[test]
fn single_date_time_scale_spans_one_day() {
    let day = date_to_day_number(date(2023, 3, 1));
    let scale = TimeScale::new(day, day, 200.0).expect("time scale");

    let (start, end) = scale.domain();
    assert_relative_eq!(end - start, 1.0);
    assert_relative_eq!(scale.time_to_pixel(day).expect("center"), 100.0);
}

#[test]
fn rent_scale_is_inverted_and_starts_at_zero() {
    let scale = RentScale::new(200_000.0, 390.0).expect("rent scale");

    assert_eq!(scale.domain(), (0.0, 200_000.0));
    assert_eq!(scale.rent_to_pixel(0.0).expect("bottom"), 390.0);
    assert_eq!(scale.rent_to_pixel(200_000.0).expect("top"), 0.0);
    assert_relative_eq!(scale.pixel_to_rent(195.0).expect("invert"), 100_000.0);
}

#[test]
fn rent_scale_from_all_zero_series_uses_unit_domain() {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 0.0),
        DataPoint::new(date(2023, 2, 1), 0.0),
    ]);
    let scale = RentScale::from_series(&series, 100.0).expect("rent scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
}

#[test]
fn scales_reject_empty_series() {
    let series = RentSeries::default();
    assert!(TimeScale::from_series(&series, 100.0).is_err());
    assert!(RentScale::from_series(&series, 100.0).is_err());
}

#[test]
fn plot_area_subtracts_margins() {
    let plot = PlotArea::from_viewport(Viewport::new(1200, 500), PlotMargins::default())
        .expect("plot area");

    assert_eq!(plot.width, 1090.0);
    assert_eq!(plot.height, 390.0);
    assert_eq!(plot.to_local(80.0, 70.0), (0.0, 0.0));
    assert_eq!(plot.to_viewport(10.0, 20.0), (90.0, 90.0));
    assert!(plot.contains_local(1090.0, 390.0));
    assert!(!plot.contains_local(-1.0, 10.0));
}

#[test]
fn plot_area_rejects_margins_larger_than_viewport() {
    let margins = PlotMargins {
        top: 300.0,
        right: 0.0,
        bottom: 300.0,
        left: 0.0,
    };
    assert!(PlotArea::from_viewport(Viewport::new(800, 500), margins).is_err());
    assert!(PlotArea::from_viewport(Viewport::new(0, 500), PlotMargins::default()).is_err());
}

#[test]
fn line_path_projects_points_in_order() {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 21), 100.0),
        DataPoint::new(date(2023, 1, 1), 0.0),
        DataPoint::new(date(2023, 1, 11), 50.0),
    ]);
    let time_scale = TimeScale::from_series(&series, 200.0).expect("time scale");
    let rent_scale = RentScale::from_series(&series, 100.0).expect("rent scale");

    let path = project_line_path(series.points(), time_scale, rent_scale).expect("path");
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], (0.0, 100.0));
    assert_relative_eq!(path[1].0, 100.0, epsilon = 1e-9);
    assert_relative_eq!(path[1].1, 50.0, epsilon = 1e-9);
    assert_relative_eq!(path[2].0, 200.0, epsilon = 1e-9);
    assert_relative_eq!(path[2].1, 0.0, epsilon = 1e-9);
}
