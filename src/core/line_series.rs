use crate::core::{DataPoint, RentScale, TimeScale};
use crate::error::ChartResult;

/// Projects every point, in order, to a plot-local `(x, y)` vertex.
pub fn project_line_path(
    points: &[DataPoint],
    time_scale: TimeScale,
    rent_scale: RentScale,
) -> ChartResult<Vec<(f64, f64)>> {
    points
        .iter()
        .map(|point| {
            Ok((
                time_scale.date_to_pixel(point.date)?,
                rent_scale.rent_to_pixel(point.rent)?,
            ))
        })
        .collect()
}
