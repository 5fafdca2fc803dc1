use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::ChartState;
use super::label_format::{format_date, format_rent_tick};

/// One time-axis tick in plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeTick {
    pub date: NaiveDate,
    pub x: f64,
    pub label: String,
}

/// One rent-axis tick in plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

impl ChartState {
    pub fn time_ticks(&self) -> ChartResult<Vec<TimeTick>> {
        let (start, end) = self.time_scale.domain_dates().ok_or_else(|| {
            ChartError::InvalidData("time domain is outside the calendar".to_owned())
        })?;
        let axis = &self.config.time_axis;

        month_ticks(start, end, axis.tick_every_months)
            .into_iter()
            .map(|date| {
                Ok(TimeTick {
                    date,
                    x: self.time_scale.date_to_pixel(date)?,
                    label: format_date(date, &axis.tick_label_format)?,
                })
            })
            .collect()
    }

    pub fn rent_ticks(&self) -> ChartResult<Vec<RentTick>> {
        let (start, end) = self.rent_scale.domain();
        let axis = &self.config.rent_axis;

        nice_ticks(start, end, axis.tick_count)
            .into_iter()
            .map(|value| {
                Ok(RentTick {
                    value,
                    y: self.rent_scale.rent_to_pixel(value)?,
                    label: format_rent_tick(value, axis),
                })
            })
            .collect()
    }
}

/// First days of every `every_months`-th month within `[start, end]`.
///
/// A month qualifies when its zero-based index within the year is divisible
/// by `every_months`, so an interval of 2 yields Jan, Mar, May, and so on.
#[must_use]
pub fn month_ticks(start: NaiveDate, end: NaiveDate, every_months: u32) -> Vec<NaiveDate> {
    let every_months = every_months.max(1);
    let Some(mut cursor) = start.with_day(1) else {
        return Vec::new();
    };
    if cursor < start {
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => return Vec::new(),
        }
    }

    let mut ticks = Vec::new();
    while cursor <= end {
        if cursor.month0() % every_months == 0 {
            ticks.push(cursor);
        }
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    ticks
}

/// Round-number ticks covering `[start, stop]`, roughly `count` of them.
///
/// Steps are 1, 2, or 5 times a power of ten. Values are computed from an
/// integer multiple so they do not accumulate float error.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let (low, high) = (start.min(stop), start.max(stop));
    let raw_step = (high - low) / count as f64;
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Vec::new();
    }

    let power = raw_step.log10().floor();
    let error = raw_step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        let step = factor * 10f64.powf(power);
        let first = (low / step).ceil() as i64;
        let last = (high / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    } else {
        let inverse = 10f64.powf(-power) / factor;
        let first = (low * inverse).ceil() as i64;
        let last = (high * inverse).floor() as i64;
        (first..=last).map(|k| k as f64 / inverse).collect()
    }
}
