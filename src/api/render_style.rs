use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths, and font sizes used by the frame builder.
///
/// Defaults reproduce the classic look of the chart: a thin green series, a
/// red hover dot with a black outline, and black axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub marker_fill_color: Color,
    pub marker_stroke_color: Color,
    pub marker_stroke_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub axis_tick_length_px: f64,
    pub axis_label_color: Color,
    pub time_tick_font_size_px: f64,
    pub rent_tick_font_size_px: f64,
    pub rent_tick_padding_px: f64,
    pub axis_title_font_size_px: f64,
    pub title_font_size_px: f64,
    pub title_color: Color,
    pub tooltip_background_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_border_width: f64,
    pub tooltip_text_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_corner_radius_px: f64,
    /// Average glyph advance as a fraction of `tooltip_font_size_px`.
    ///
    /// The tooltip box is sized from this estimate when the frame is built,
    /// without measuring text, so frames stay backend independent. Backends
    /// that shape text (Pango) may draw slightly narrower or wider lines.
    pub tooltip_glyph_width_ratio: f64,
    /// Tooltip line pitch as a fraction of `tooltip_font_size_px`.
    pub tooltip_line_height_ratio: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            series_line_color: Color::rgb(0.0, 128.0 / 255.0, 0.0),
            series_line_width: 1.0,
            marker_fill_color: Color::rgb(1.0, 0.0, 0.0),
            marker_stroke_color: Color::rgb(0.0, 0.0, 0.0),
            marker_stroke_width: 1.0,
            axis_line_color: Color::rgb(0.0, 0.0, 0.0),
            axis_line_width: 1.0,
            axis_tick_length_px: 6.0,
            axis_label_color: Color::rgb(0.0, 0.0, 0.0),
            time_tick_font_size_px: 15.0,
            rent_tick_font_size_px: 12.0,
            rent_tick_padding_px: 1.0,
            axis_title_font_size_px: 20.0,
            title_font_size_px: 30.0,
            title_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_background_color: Color::rgba(1.0, 1.0, 1.0, 0.92),
            tooltip_border_color: Color::rgb(0.6, 0.6, 0.6),
            tooltip_border_width: 1.0,
            tooltip_text_color: Color::rgb(0.0, 0.0, 0.0),
            tooltip_font_size_px: 12.0,
            tooltip_padding_px: 6.0,
            tooltip_corner_radius_px: 3.0,
            tooltip_glyph_width_ratio: 0.6,
            tooltip_line_height_ratio: 1.35,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.series_line_color,
            self.marker_fill_color,
            self.marker_stroke_color,
            self.axis_line_color,
            self.axis_label_color,
            self.title_color,
            self.tooltip_background_color,
            self.tooltip_border_color,
            self.tooltip_text_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("series line width", self.series_line_width),
            ("axis line width", self.axis_line_width),
            ("time tick font size", self.time_tick_font_size_px),
            ("rent tick font size", self.rent_tick_font_size_px),
            ("axis title font size", self.axis_title_font_size_px),
            ("title font size", self.title_font_size_px),
            ("tooltip font size", self.tooltip_font_size_px),
            ("tooltip glyph width ratio", self.tooltip_glyph_width_ratio),
            ("tooltip line height ratio", self.tooltip_line_height_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("marker stroke width", self.marker_stroke_width),
            ("axis tick length", self.axis_tick_length_px),
            ("rent tick padding", self.rent_tick_padding_px),
            ("tooltip border width", self.tooltip_border_width),
            ("tooltip padding", self.tooltip_padding_px),
            ("tooltip corner radius", self.tooltip_corner_radius_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }
}
