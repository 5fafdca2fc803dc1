use chrono::NaiveDate;
use tracing::debug;

use crate::core::DataPoint;
use crate::core::primitives::date_to_day_number;

/// Rent observations kept in ascending date order.
///
/// Nearest-point lookup relies on the ordering, so the only way in is through
/// [`RentSeries::new`], which canonicalizes its input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RentSeries {
    points: Vec<DataPoint>,
}

impl RentSeries {
    /// Sorts by date and collapses duplicate dates, keeping the last occurrence.
    ///
    /// Rents that are not finite are dropped.
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        let original_count = points.len();
        let points = canonicalize_points(points);
        debug!(
            original_count,
            canonical_count = points.len(),
            "canonicalized rent series"
        );
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&DataPoint> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DataPoint> {
        self.points.last()
    }

    #[must_use]
    pub fn date_extent(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.first()?.date, self.last()?.date))
    }

    /// Leftmost index at which `time` (a day number) could be inserted
    /// without breaking the order.
    #[must_use]
    pub fn bisect_left(&self, time: f64) -> usize {
        self.points
            .partition_point(|point| date_to_day_number(point.date) < time)
    }
}

impl FromIterator<DataPoint> for RentSeries {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn canonicalize_points(mut points: Vec<DataPoint>) -> Vec<DataPoint> {
    points.retain(|point| point.rent.is_finite());
    points.sort_by_key(|point| point.date);

    let mut deduped: Vec<DataPoint> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = deduped.last_mut() {
            if last.date == point.date {
                *last = point;
                continue;
            }
        }
        deduped.push(point);
    }
    deduped
}
