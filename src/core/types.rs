use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{date_to_day_number, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot for axes and titles, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            top: 70.0,
            right: 30.0,
            bottom: 40.0,
            left: 80.0,
        }
    }
}

/// Plotting rectangle inside a viewport.
///
/// Scales map into plot-local pixels (`0..width`, `0..height`); `left`/`top`
/// translate them back into viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: PlotMargins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (side, value) in [
            ("top", margins.top),
            ("right", margins.right),
            ("bottom", margins.bottom),
            ("left", margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area: width={width}, height={height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    /// Converts a viewport coordinate into plot-local space.
    #[must_use]
    pub fn to_local(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.left, y - self.top)
    }

    /// Converts a plot-local coordinate into viewport space.
    #[must_use]
    pub fn to_viewport(self, x: f64, y: f64) -> (f64, f64) {
        (x + self.left, y + self.top)
    }

    #[must_use]
    pub fn contains_local(self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// One rent observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub date: NaiveDate,
    pub rent: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(date: NaiveDate, rent: f64) -> Self {
        Self { date, rent }
    }

    pub fn from_decimal_rent(date: NaiveDate, rent: Decimal) -> ChartResult<Self> {
        Ok(Self {
            date,
            rent: decimal_to_f64(rent, "rent")?,
        })
    }

    #[must_use]
    pub fn day_number(self) -> f64 {
        date_to_day_number(self.date)
    }
}
