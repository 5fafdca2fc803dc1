use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

fn epoch() -> NaiveDate {
    DateTime::<Utc>::UNIX_EPOCH.date_naive()
}

/// Days since 1970-01-01. This is the time scale's domain unit.
#[must_use]
pub fn date_to_day_number(date: NaiveDate) -> f64 {
    date.signed_duration_since(epoch()).num_days() as f64
}

/// Calendar date containing the given (possibly fractional) day number.
#[must_use]
pub fn day_number_to_date(day_number: f64) -> Option<NaiveDate> {
    if !day_number.is_finite() {
        return None;
    }
    let whole = day_number.floor();
    if whole.abs() > i32::MAX as f64 {
        return None;
    }
    epoch().checked_add_signed(TimeDelta::try_days(whole as i64)?)
}

/// Instant for a fractional day number, rounded to the second.
#[must_use]
pub fn day_number_to_datetime(day_number: f64) -> Option<NaiveDateTime> {
    let date = day_number_to_date(day_number)?;
    let seconds = ((day_number - day_number.floor()) * SECONDS_PER_DAY).round() as i64;
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(TimeDelta::try_seconds(seconds)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbers_round_trip_through_dates() {
        let date = NaiveDate::from_ymd_opt(2023, 3, 1).expect("valid date");
        let day = date_to_day_number(date);
        assert_eq!(day_number_to_date(day), Some(date));
        assert_eq!(day_number_to_date(day + 0.75), Some(date));
    }

    #[test]
    fn fractional_day_maps_to_time_of_day() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid date");
        let instant = day_number_to_datetime(date_to_day_number(date) + 0.5).expect("instant");
        assert_eq!(instant.time(), NaiveTime::from_hms_opt(12, 0, 0).expect("noon"));
    }

    #[test]
    fn non_finite_day_number_has_no_date() {
        assert_eq!(day_number_to_date(f64::NAN), None);
    }
}
