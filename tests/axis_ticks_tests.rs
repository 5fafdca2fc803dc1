use approx::assert_relative_eq;
use chrono::NaiveDate;
use rent_chart::api::{ChartEngineConfig, ChartState, month_ticks, nice_ticks};
use rent_chart::core::{DataPoint, RentSeries};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn state(config: ChartEngineConfig) -> ChartState {
    let series = RentSeries::new(vec![
        DataPoint::new(date(2023, 1, 1), 1_200_000.0),
        DataPoint::new(date(2023, 3, 1), 1_500_000.0),
        DataPoint::new(date(2023, 6, 1), 2_000_000.0),
    ]);
    ChartState::new(series, config).expect("chart state")
}

#[test]
fn month_ticks_fall_on_every_other_month_start() {
    let ticks = month_ticks(date(2023, 1, 1), date(2023, 6, 1), 2);
    assert_eq!(
        ticks,
        vec![date(2023, 1, 1), date(2023, 3, 1), date(2023, 5, 1)]
    );
}

#[test]
fn month_ticks_skip_partial_first_month_and_include_end() {
    let ticks = month_ticks(date(2023, 1, 15), date(2023, 7, 1), 2);
    assert_eq!(
        ticks,
        vec![date(2023, 3, 1), date(2023, 5, 1), date(2023, 7, 1)]
    );
}

#[test]
fn month_ticks_cross_year_boundaries() {
    let ticks = month_ticks(date(2023, 10, 1), date(2024, 4, 30), 3);
    assert_eq!(
        ticks,
        vec![date(2023, 10, 1), date(2024, 1, 1), date(2024, 4, 1)]
    );
}

#[test]
fn nice_ticks_use_round_steps() {
    assert_eq!(
        nice_ticks(0.0, 200_000.0, 5),
        vec![0.0, 50_000.0, 100_000.0, 150_000.0, 200_000.0]
    );
    assert_eq!(
        nice_ticks(0.0, 2_000_000.0, 10),
        vec![
            0.0, 200_000.0, 400_000.0, 600_000.0, 800_000.0, 1_000_000.0, 1_200_000.0,
            1_400_000.0, 1_600_000.0, 1_800_000.0, 2_000_000.0
        ]
    );
}

#[test]
fn nice_ticks_handle_fractional_steps() {
    let ticks = nice_ticks(0.0, 1.0, 5);
    assert_eq!(ticks.len(), 6);
    for (tick, expected) in ticks.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
        assert_relative_eq!(*tick, expected, epsilon = 1e-12);
    }
}

#[test]
fn nice_ticks_degenerate_inputs() {
    assert!(nice_ticks(0.0, 100.0, 0).is_empty());
    assert!(nice_ticks(f64::NAN, 100.0, 5).is_empty());
    assert_eq!(nice_ticks(7.0, 7.0, 5), vec![7.0]);
}

#[test]
fn chart_time_ticks_are_labeled_and_positioned() {
    let state = state(ChartEngineConfig::default());
    let ticks = state.time_ticks().expect("time ticks");

    let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 2023", "Mar 2023", "May 2023"]);
    assert_eq!(ticks[0].x, 0.0);
    assert!(ticks.windows(2).all(|pair| pair[0].x < pair[1].x));
    assert!(ticks.iter().all(|tick| tick.x <= state.plot_area().width));
}

#[test]
fn chart_rent_ticks_follow_configured_density() {
    let state = state(ChartEngineConfig::default());
    let ticks = state.rent_ticks().expect("rent ticks");

    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0].value, 0.0);
    assert_eq!(ticks[0].y, state.plot_area().height);
    assert_eq!(ticks[0].label, "0 million");
    let top = ticks.last().expect("top tick");
    assert_eq!(top.value, 2_000_000.0);
    assert_eq!(top.y, 0.0);
    assert_eq!(top.label, "2 million");

    let dense = state_with_ticks(10);
    assert_eq!(dense.rent_ticks().expect("dense ticks").len(), 11);
}

#[test]
fn monthly_interval_is_configurable() {
    let state = state(ChartEngineConfig::default().with_time_tick_every_months(1));
    assert_eq!(state.time_ticks().expect("time ticks").len(), 6);
}

fn state_with_ticks(count: usize) -> ChartState {
    state(ChartEngineConfig::default().with_rent_tick_count(count))
}
