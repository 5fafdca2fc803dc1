use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Pointer position resolved against the series for one move event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Plot-local horizontal pixel the event was delivered at.
    pub pixel_x: f64,
    /// `pixel_x` inverted through the time scale, in day numbers.
    pub inverted_time: f64,
    pub nearest_index: usize,
    pub nearest: DataPoint,
}

/// Hover marker drawn on the resolved point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl MarkerState {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            radius: 0.0,
        }
    }
}

impl Default for MarkerState {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Ordered label/value pairs shown in the tooltip.
///
/// `IndexMap` keeps insertion order so rendered lines and JSON snapshots
/// are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipContent {
    fields: IndexMap<String, String>,
}

impl TooltipContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(label.into(), value.into());
        self
    }

    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, String> {
        &self.fields
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.fields.get(label).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders each field as `label: value`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect()
    }
}

/// Tooltip anchored next to the marker, in plot-local pixels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub left: f64,
    pub top: f64,
    pub content: TooltipContent,
}

/// Marker and tooltip produced by one pointer event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub pointer: Option<PointerState>,
    pub marker: MarkerState,
    pub tooltip: TooltipState,
}

impl DisplayState {
    /// State after the pointer leaves the plot: nothing shown.
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.marker.visible || self.tooltip.visible
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize display state: {e}"))
        })
    }
}

/// Latest display state seen by an engine.
///
/// A newer move simply replaces the previous state; nothing is queued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    display: DisplayState,
    move_events: u64,
}

impl InteractionState {
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    #[must_use]
    pub fn move_events(&self) -> u64 {
        self.move_events
    }

    pub fn on_pointer_move(&mut self, display: DisplayState) {
        self.move_events += 1;
        self.display = display;
    }

    pub fn on_pointer_leave(&mut self) {
        self.display = DisplayState::hidden();
    }
}
