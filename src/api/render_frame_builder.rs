use std::f64::consts::FRAC_PI_2;

use crate::error::ChartResult;
use crate::interaction::DisplayState;
use crate::render::{
    CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::ChartState;

/// Gap between a time tick mark and its label.
const TIME_LABEL_GAP_PX: f64 = 3.0;
/// Distance of the rotated rent-axis title from the viewport's left edge.
const RENT_TITLE_INSET_PX: f64 = 4.0;
/// Distance of the chart title from the viewport's top edge.
const TITLE_TOP_PX: f64 = 8.0;

impl ChartState {
    /// Builds the complete scene for the current display state.
    ///
    /// The marker and tooltip appear only while `display` is hovering.
    pub fn build_render_frame(&self, display: &DisplayState) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.config.viewport);
        self.push_time_axis(&mut frame)?;
        self.push_rent_axis(&mut frame)?;
        self.push_titles(&mut frame);
        self.push_series(&mut frame)?;
        self.push_marker(&mut frame, display);
        self.push_tooltip(&mut frame, display);
        Ok(frame)
    }

    fn push_time_axis(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = self.config.style;
        let plot = self.plot;
        let axis_y = plot.top + plot.height;

        frame.lines.push(LinePrimitive::new(
            plot.left,
            axis_y,
            plot.left + plot.width,
            axis_y,
            style.axis_line_width,
            style.axis_line_color,
        ));

        for tick in self.time_ticks()? {
            let x = plot.left + tick.x;
            frame.lines.push(LinePrimitive::new(
                x,
                axis_y,
                x,
                axis_y + style.axis_tick_length_px,
                style.axis_line_width,
                style.axis_line_color,
            ));
            if tick.label.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                tick.label,
                x,
                axis_y + style.axis_tick_length_px + TIME_LABEL_GAP_PX,
                style.time_tick_font_size_px,
                style.axis_label_color,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn push_rent_axis(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = self.config.style;
        let plot = self.plot;

        frame.lines.push(LinePrimitive::new(
            plot.left,
            plot.top,
            plot.left,
            plot.top + plot.height,
            style.axis_line_width,
            style.axis_line_color,
        ));

        for tick in self.rent_ticks()? {
            let y = plot.top + tick.y;
            frame.lines.push(LinePrimitive::new(
                plot.left - style.axis_tick_length_px,
                y,
                plot.left,
                y,
                style.axis_line_width,
                style.axis_line_color,
            ));
            if tick.label.is_empty() {
                continue;
            }
            frame.texts.push(TextPrimitive::new(
                tick.label,
                plot.left - style.axis_tick_length_px - style.rent_tick_padding_px,
                y - style.rent_tick_font_size_px / 2.0,
                style.rent_tick_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }

    fn push_titles(&self, frame: &mut RenderFrame) {
        let style = self.config.style;
        let plot = self.plot;

        if !self.config.rent_axis.title.is_empty() {
            frame.texts.push(
                TextPrimitive::new(
                    self.config.rent_axis.title.as_str(),
                    RENT_TITLE_INSET_PX,
                    plot.top + plot.height / 2.0,
                    style.axis_title_font_size_px,
                    style.axis_label_color,
                    TextHAlign::Center,
                )
                .with_rotation(-FRAC_PI_2),
            );
        }

        if !self.config.title.is_empty() {
            frame.texts.push(TextPrimitive::new(
                self.config.title.as_str(),
                f64::from(self.config.viewport.width) / 2.0,
                TITLE_TOP_PX,
                style.title_font_size_px,
                style.title_color,
                TextHAlign::Center,
            ));
        }
    }

    fn push_series(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let style = self.config.style;
        let points = self
            .line_path()?
            .into_iter()
            .map(|(x, y)| self.plot.to_viewport(x, y))
            .collect();
        frame.polylines.push(PolylinePrimitive::new(
            points,
            style.series_line_width,
            style.series_line_color,
        ));
        Ok(())
    }

    fn push_marker(&self, frame: &mut RenderFrame, display: &DisplayState) {
        let marker = display.marker;
        if !marker.visible || marker.radius <= 0.0 {
            return;
        }
        let style = self.config.style;
        let (cx, cy) = self.plot.to_viewport(marker.x, marker.y);
        frame.circles.push(CirclePrimitive {
            cx,
            cy,
            radius: marker.radius,
            fill_color: style.marker_fill_color,
            stroke_width: style.marker_stroke_width,
            stroke_color: style.marker_stroke_color,
        });
    }

    fn push_tooltip(&self, frame: &mut RenderFrame, display: &DisplayState) {
        let tooltip = &display.tooltip;
        if !tooltip.visible || tooltip.content.is_empty() {
            return;
        }
        let style = self.config.style;
        let lines = tooltip.content.lines();
        let line_height = style.tooltip_font_size_px * style.tooltip_line_height_ratio;
        let widest = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = widest * style.tooltip_font_size_px * style.tooltip_glyph_width_ratio
            + 2.0 * style.tooltip_padding_px;
        let height = lines.len() as f64 * line_height + 2.0 * style.tooltip_padding_px;
        let (left, top) = self.plot.to_viewport(tooltip.left, tooltip.top);

        frame.rects.push(
            RectPrimitive::new(left, top, width, height, style.tooltip_background_color)
                .with_border(style.tooltip_border_width, style.tooltip_border_color)
                .with_corner_radius(style.tooltip_corner_radius_px),
        );
        for (row, line) in lines.into_iter().enumerate() {
            frame.texts.push(TextPrimitive::new(
                line,
                left + style.tooltip_padding_px,
                top + style.tooltip_padding_px + row as f64 * line_height,
                style.tooltip_font_size_px,
                style.tooltip_text_color,
                TextHAlign::Left,
            ));
        }
    }
}
