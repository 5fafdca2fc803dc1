use std::path::Path;

use tracing::debug;

use crate::core::RentSeries;
use crate::data::{CsvLoadOptions, RejectedRow, load_from_path};
use crate::error::ChartResult;
use crate::interaction::{DisplayState, InteractionState};
use crate::render::Renderer;

use super::{ChartEngineConfig, ChartState};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main facade consumed by host applications.
///
/// An engine exists only once its data is loaded, so pointer handlers wired
/// to it can never run against an empty chart.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) state: ChartState,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig, series: RentSeries) -> ChartResult<Self> {
        let state = ChartState::new(series, config)?;
        Ok(Self {
            renderer,
            state,
            interaction: InteractionState::default(),
        })
    }

    /// Loads a CSV file and builds an engine from the rows that parsed.
    ///
    /// Rows rejected under [`crate::data::RowErrorPolicy::Skip`] are returned
    /// alongside the engine.
    pub fn from_csv_path(
        renderer: R,
        config: ChartEngineConfig,
        path: impl AsRef<Path>,
        options: &CsvLoadOptions,
    ) -> ChartResult<(Self, Vec<RejectedRow>)> {
        let report = load_from_path(path, options)?;
        debug!(
            points = report.series.len(),
            rejected = report.rejected.len(),
            "building engine from csv"
        );
        let engine = Self::new(renderer, config, report.series)?;
        Ok((engine, report.rejected))
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn display_state(&self) -> &DisplayState {
        self.interaction.display()
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.state.build_render_frame(self.interaction.display())?;
        self.renderer.render(&frame)
    }

    /// Renders into an external cairo context, as GTK draw callbacks require.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.state.build_render_frame(self.interaction.display())?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}
