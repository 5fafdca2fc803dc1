use tracing::debug;

use crate::core::{DataPoint, PlotArea, RentScale, RentSeries, TimeScale, project_line_path};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{DisplayState, MarkerState, TooltipState};

use super::ChartEngineConfig;
use super::label_format::tooltip_content;

/// Everything a pointer event needs, built once after the data is loaded.
///
/// The series, both scales, and the plot rectangle are fixed for the life of
/// the value; handlers borrow it and return a fresh [`DisplayState`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub(super) series: RentSeries,
    pub(super) time_scale: TimeScale,
    pub(super) rent_scale: RentScale,
    pub(super) plot: PlotArea,
    pub(super) config: ChartEngineConfig,
}

impl ChartState {
    /// Fits both scales to `series` inside the configured plot area.
    ///
    /// Fails with [`ChartError::EmptyDataset`] when there is nothing to plot.
    pub fn new(series: RentSeries, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        if series.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let plot = PlotArea::from_viewport(config.viewport, config.margins)?;
        let time_scale = TimeScale::from_series(&series, plot.width)?
            .with_clamp(config.time_axis.clamp_pointer_to_plot);
        let rent_scale = RentScale::from_series(&series, plot.height)?;
        debug!(
            points = series.len(),
            time_domain = ?time_scale.domain(),
            rent_domain = ?rent_scale.domain(),
            plot_width = plot.width,
            plot_height = plot.height,
            "chart state initialized"
        );

        Ok(Self {
            series,
            time_scale,
            rent_scale,
            plot,
            config,
        })
    }

    #[must_use]
    pub fn series(&self) -> &RentSeries {
        &self.series
    }

    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time_scale
    }

    #[must_use]
    pub fn rent_scale(&self) -> RentScale {
        self.rent_scale
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    /// Plot-local pixel position of a data point.
    pub fn project_point(&self, point: DataPoint) -> ChartResult<(f64, f64)> {
        Ok((
            self.time_scale.date_to_pixel(point.date)?,
            self.rent_scale.rent_to_pixel(point.rent)?,
        ))
    }

    /// Plot-local vertices of the series line.
    pub fn line_path(&self) -> ChartResult<Vec<(f64, f64)>> {
        project_line_path(self.series.points(), self.time_scale, self.rent_scale)
    }

    /// Resolves the hovered point and lays out the marker and tooltip for it.
    pub fn on_pointer_move(&self, pixel_x: f64) -> ChartResult<DisplayState> {
        let pointer = self.resolve_pointer(pixel_x)?;
        let (x, y) = self.project_point(pointer.nearest)?;
        let tooltip = &self.config.tooltip;

        Ok(DisplayState {
            pointer: Some(pointer),
            marker: MarkerState {
                visible: true,
                x,
                y,
                radius: self.config.marker.radius,
            },
            tooltip: TooltipState {
                visible: true,
                left: x + tooltip.offset_x,
                top: y + tooltip.offset_y,
                content: tooltip_content(pointer.nearest, tooltip)?,
            },
        })
    }

    /// Hides the marker and tooltip.
    #[must_use]
    pub fn on_pointer_leave(&self) -> DisplayState {
        DisplayState::hidden()
    }
}
