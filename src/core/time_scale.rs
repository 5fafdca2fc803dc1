use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_day_number, day_number_to_date, day_number_to_datetime};
use crate::core::{LinearScale, RentSeries};
use crate::error::{ChartError, ChartResult};

/// Span given to a single-date dataset so inversion stays defined.
const SINGLE_DATE_SPAN_DAYS: f64 = 1.0;

/// Horizontal scale from calendar time onto plot-local pixels.
///
/// The domain is expressed in day numbers (days since 1970-01-01) so that
/// inverted pointer positions can land between two calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale over `[time_start, time_end]` day numbers and `[0, width_px]`.
    pub fn new(time_start: f64, time_end: f64, width_px: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end)?;
        Ok(Self {
            linear: LinearScale::new(start, end, 0.0, width_px)?,
        })
    }

    /// Fits the domain to the first and last dates of a sorted series.
    pub fn from_series(series: &RentSeries, width_px: f64) -> ChartResult<Self> {
        let (first, last) = series.date_extent().ok_or(ChartError::EmptyDataset)?;
        Self::new(date_to_day_number(first), date_to_day_number(last), width_px)
    }

    #[must_use]
    pub fn with_clamp(self, clamp: bool) -> Self {
        Self {
            linear: self.linear.with_clamp(clamp),
        }
    }

    /// Domain in day numbers.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn domain_dates(self) -> Option<(NaiveDate, NaiveDate)> {
        let (start, end) = self.domain();
        Some((day_number_to_date(start.ceil())?, day_number_to_date(end)?))
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.linear.range().1
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn date_to_pixel(self, date: NaiveDate) -> ChartResult<f64> {
        self.time_to_pixel(date_to_day_number(date))
    }

    /// Inverts a pixel into a fractional day number.
    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }

    pub fn pixel_to_datetime(self, pixel: f64) -> ChartResult<NaiveDateTime> {
        let time = self.pixel_to_time(pixel)?;
        day_number_to_datetime(time).ok_or_else(|| {
            ChartError::InvalidData(format!("inverted time {time} is outside the calendar"))
        })
    }
}

fn normalize_range(start: f64, end: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = SINGLE_DATE_SPAN_DAYS / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
