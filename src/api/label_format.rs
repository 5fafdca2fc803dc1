use std::fmt::Write as _;

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};
use crate::interaction::TooltipContent;

use super::{RentAxisConfig, TooltipConfig};

/// Formats a date with a strftime pattern, reporting bad patterns as errors.
pub fn format_date(date: NaiveDate, pattern: &str) -> ChartResult<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(pattern)).map_err(|_| {
        ChartError::InvalidData(format!("invalid date format pattern `{pattern}`"))
    })?;
    Ok(out)
}

/// Rent-axis label: `value / divisor` at fixed precision plus suffix.
///
/// Non-finite values render as an empty label.
#[must_use]
pub fn format_rent_tick(value: f64, axis: &RentAxisConfig) -> String {
    if !value.is_finite() {
        return String::new();
    }
    format!(
        "{}{}",
        format_fixed(value / axis.label_divisor, axis.label_precision),
        axis.label_suffix
    )
}

/// Fixed-point text with exact halves rounded away from zero, so `172500.5`
/// at precision 0 reads `172501` (plain `format!` would give `172500`).
#[must_use]
pub fn format_fixed(value: f64, precision: usize) -> String {
    let dp = u32::try_from(precision).unwrap_or(u32::MAX);
    match Decimal::from_f64(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        }
        None => format!("{value:.precision$}"),
    }
}

/// Tooltip fields for a hovered point: date first, then rent.
pub fn tooltip_content(point: DataPoint, tooltip: &TooltipConfig) -> ChartResult<TooltipContent> {
    let date = format_date(point.date, &tooltip.date_format)?;
    let rent = format!(
        "{}{}",
        format_fixed(point.rent, tooltip.rent_precision),
        tooltip.rent_suffix
    );
    Ok(TooltipContent::new()
        .with_field(tooltip.date_label.as_str(), date)
        .with_field(tooltip.rent_label.as_str(), rent))
}
