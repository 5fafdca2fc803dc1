use smallvec::SmallVec;
use tracing::trace;

use crate::core::{DataPoint, RentSeries};
use crate::error::{ChartError, ChartResult};
use crate::interaction::PointerState;

use super::ChartState;

impl ChartState {
    /// Resolves a plot-local horizontal pixel to the nearest sample by date.
    pub fn resolve_nearest(&self, pixel_x: f64) -> ChartResult<DataPoint> {
        Ok(self.resolve_pointer(pixel_x)?.nearest)
    }

    /// Like [`ChartState::resolve_nearest`], keeping the inverted time and index.
    pub fn resolve_pointer(&self, pixel_x: f64) -> ChartResult<PointerState> {
        let inverted_time = self.time_scale.pixel_to_time(pixel_x)?;
        let (nearest_index, nearest) = nearest_by_time(&self.series, inverted_time)?;
        trace!(pixel_x, inverted_time, nearest_index, "resolved pointer");
        Ok(PointerState {
            pixel_x,
            inverted_time,
            nearest_index,
            nearest,
        })
    }
}

/// Finds the sample closest to `time` (a day number) in a sorted series.
///
/// Only the two neighbors around the insertion point are compared. The later
/// one wins only when it is strictly closer, so ties go to the earlier date.
pub fn nearest_by_time(series: &RentSeries, time: f64) -> ChartResult<(usize, DataPoint)> {
    if !time.is_finite() {
        return Err(ChartError::InvalidData(
            "lookup time must be finite".to_owned(),
        ));
    }

    let index = series.bisect_left(time);
    let mut candidates: SmallVec<[(usize, DataPoint); 2]> = SmallVec::new();
    if let Some(before) = index.checked_sub(1) {
        if let Some(point) = series.get(before) {
            candidates.push((before, *point));
        }
    }
    if let Some(point) = series.get(index) {
        candidates.push((index, *point));
    }

    match candidates.as_slice() {
        [] => Err(ChartError::EmptyDataset),
        [only] => Ok(*only),
        [before, after, ..] => {
            let before_distance = time - before.1.day_number();
            let after_distance = after.1.day_number() - time;
            Ok(if after_distance < before_distance {
                *after
            } else {
                *before
            })
        }
    }
}
