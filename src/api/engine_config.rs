use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::{PlotMargins, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Upper bound on requested rent ticks; keeps a bad config from allocating
/// an absurd number of labels.
pub const MAX_RENT_TICK_COUNT: usize = 64;

/// Horizontal axis behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisConfig {
    /// Ticks land on the first day of months whose zero-based index is a
    /// multiple of this value.
    #[serde(default = "default_tick_every_months")]
    pub tick_every_months: u32,
    #[serde(default = "default_time_tick_label_format")]
    pub tick_label_format: String,
    /// When set, pointer positions outside the plot invert to the domain edges
    /// instead of extrapolating.
    #[serde(default)]
    pub clamp_pointer_to_plot: bool,
}

impl Default for TimeAxisConfig {
    fn default() -> Self {
        Self {
            tick_every_months: default_tick_every_months(),
            tick_label_format: default_time_tick_label_format(),
            clamp_pointer_to_plot: false,
        }
    }
}

/// Vertical axis behavior. Tick density is explicit rather than derived
/// from the data range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentAxisConfig {
    #[serde(default = "default_rent_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_rent_label_divisor")]
    pub label_divisor: f64,
    #[serde(default)]
    pub label_precision: usize,
    #[serde(default = "default_rent_label_suffix")]
    pub label_suffix: String,
    #[serde(default = "default_rent_axis_title")]
    pub title: String,
}

impl Default for RentAxisConfig {
    fn default() -> Self {
        Self {
            tick_count: default_rent_tick_count(),
            label_divisor: default_rent_label_divisor(),
            label_precision: 0,
            label_suffix: default_rent_label_suffix(),
            title: default_rent_axis_title(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    #[serde(default = "default_tooltip_offset_x")]
    pub offset_x: f64,
    #[serde(default = "default_tooltip_offset_y")]
    pub offset_y: f64,
    #[serde(default = "default_tooltip_date_label")]
    pub date_label: String,
    #[serde(default = "default_tooltip_date_format")]
    pub date_format: String,
    #[serde(default = "default_tooltip_rent_label")]
    pub rent_label: String,
    #[serde(default)]
    pub rent_precision: usize,
    #[serde(default = "default_tooltip_rent_suffix")]
    pub rent_suffix: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: default_tooltip_offset_x(),
            offset_y: default_tooltip_offset_y(),
            date_label: default_tooltip_date_label(),
            date_format: default_tooltip_date_format(),
            rent_label: default_tooltip_rent_label(),
            rent_precision: 0,
            rent_suffix: default_tooltip_rent_suffix(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Radius of the hover marker while the pointer is over the plot.
    pub radius: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self { radius: 2.0 }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can keep chart setup in a JSON file; every field
/// falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub time_axis: TimeAxisConfig,
    #[serde(default)]
    pub rent_axis: RentAxisConfig,
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub marker: MarkerConfig,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(default_viewport())
    }
}

impl ChartEngineConfig {
    /// Creates a config with default layout, labels, and style.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margins: PlotMargins::default(),
            title: default_title(),
            time_axis: TimeAxisConfig::default(),
            rent_axis: RentAxisConfig::default(),
            tooltip: TooltipConfig::default(),
            marker: MarkerConfig::default(),
            style: RenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the target number of rent-axis ticks.
    #[must_use]
    pub fn with_rent_tick_count(mut self, tick_count: usize) -> Self {
        self.rent_axis.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_time_tick_every_months(mut self, months: u32) -> Self {
        self.time_axis.tick_every_months = months;
        self
    }

    #[must_use]
    pub fn with_pointer_clamp(mut self, clamp: bool) -> Self {
        self.time_axis.clamp_pointer_to_plot = clamp;
        self
    }

    #[must_use]
    pub fn with_marker_radius(mut self, radius: f64) -> Self {
        self.marker.radius = radius;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.time_axis.tick_every_months == 0 {
            return Err(ChartError::InvalidData(
                "time axis tick interval must be >= 1 month".to_owned(),
            ));
        }
        validate_date_pattern(&self.time_axis.tick_label_format, "time axis tick label")?;
        if self.rent_axis.tick_count > MAX_RENT_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "rent axis tick count must be <= {MAX_RENT_TICK_COUNT}"
            )));
        }
        if !self.rent_axis.label_divisor.is_finite() || self.rent_axis.label_divisor <= 0.0 {
            return Err(ChartError::InvalidData(
                "rent axis label divisor must be finite and > 0".to_owned(),
            ));
        }
        if !self.tooltip.offset_x.is_finite() || !self.tooltip.offset_y.is_finite() {
            return Err(ChartError::InvalidData(
                "tooltip offsets must be finite".to_owned(),
            ));
        }
        validate_date_pattern(&self.tooltip.date_format, "tooltip date")?;
        if !self.marker.radius.is_finite() || self.marker.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker radius must be finite and > 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

fn validate_date_pattern(pattern: &str, what: &str) -> ChartResult<()> {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ChartError::InvalidData(format!(
            "{what} format `{pattern}` is not a valid strftime pattern"
        )));
    }
    Ok(())
}

fn default_viewport() -> Viewport {
    Viewport::new(1200, 500)
}

fn default_title() -> String {
    "Cost of Yearly Rent in the UAE since January 2023".to_owned()
}

fn default_tick_every_months() -> u32 {
    2
}

fn default_time_tick_label_format() -> String {
    "%b %Y".to_owned()
}

fn default_rent_tick_count() -> usize {
    5
}

fn default_rent_label_divisor() -> f64 {
    1_000_000.0
}

fn default_rent_label_suffix() -> String {
    " million".to_owned()
}

fn default_rent_axis_title() -> String {
    "Rent in AED (0.27USD)".to_owned()
}

fn default_tooltip_offset_x() -> f64 {
    25.0
}

fn default_tooltip_offset_y() -> f64 {
    10.0
}

fn default_tooltip_date_label() -> String {
    "Date".to_owned()
}

fn default_tooltip_date_format() -> String {
    "%-m/%-d/%Y".to_owned()
}

fn default_tooltip_rent_label() -> String {
    "rent".to_owned()
}

fn default_tooltip_rent_suffix() -> String {
    " AED".to_owned()
}
