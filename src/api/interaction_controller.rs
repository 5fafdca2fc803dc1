use tracing::trace;

use crate::error::ChartResult;
use crate::interaction::DisplayState;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Handles a pointer move at a plot-local horizontal pixel.
    ///
    /// On error the previous display state is kept.
    pub fn pointer_move(&mut self, pixel_x: f64) -> ChartResult<&DisplayState> {
        let display = self.state.on_pointer_move(pixel_x)?;
        self.interaction.on_pointer_move(display);
        Ok(self.interaction.display())
    }

    /// Handles a pointer move delivered in viewport coordinates.
    ///
    /// Only the plot rectangle listens for hover; leaving it counts as a
    /// pointer leave.
    pub fn pointer_move_viewport(&mut self, x: f64, y: f64) -> ChartResult<&DisplayState> {
        let plot = self.state.plot_area();
        let (local_x, local_y) = plot.to_local(x, y);
        if !plot.contains_local(local_x, local_y) {
            trace!(x, y, "pointer outside plot area");
            self.pointer_leave();
            return Ok(self.interaction.display());
        }
        self.pointer_move(local_x)
    }

    /// Hides the marker and tooltip.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }
}
