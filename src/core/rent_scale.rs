use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, RentSeries};
use crate::error::{ChartError, ChartResult};

/// Vertical scale from rent amounts onto plot-local pixels.
///
/// The domain always starts at zero and the range is inverted, so the
/// largest rent sits at the top edge of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentScale {
    linear: LinearScale,
}

impl RentScale {
    /// Creates a scale over `[0, rent_max]` and `[height_px, 0]`.
    ///
    /// A zero maximum falls back to `[0, 1]`.
    pub fn new(rent_max: f64, height_px: f64) -> ChartResult<Self> {
        if !rent_max.is_finite() || rent_max < 0.0 {
            return Err(ChartError::InvalidData(
                "rent scale maximum must be finite and >= 0".to_owned(),
            ));
        }
        let domain_end = if rent_max == 0.0 { 1.0 } else { rent_max };
        Ok(Self {
            linear: LinearScale::new(0.0, domain_end, height_px, 0.0)?,
        })
    }

    pub fn from_series(series: &RentSeries, height_px: f64) -> ChartResult<Self> {
        let max = series
            .points()
            .iter()
            .map(|point| OrderedFloat(point.rent))
            .max()
            .ok_or(ChartError::EmptyDataset)?;
        Self::new(max.0, height_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.linear.range().0
    }

    pub fn rent_to_pixel(self, rent: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(rent)
    }

    pub fn pixel_to_rent(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
