mod axis_ticks;
mod chart_state;
mod engine;
mod engine_config;
mod interaction_controller;
mod json_contract;
mod label_format;
mod render_frame_builder;
mod render_style;
mod snap_resolver;

pub use axis_ticks::{RentTick, TimeTick, month_ticks, nice_ticks};
pub use chart_state::ChartState;
pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, MAX_RENT_TICK_COUNT, MarkerConfig, RentAxisConfig, TimeAxisConfig,
    TooltipConfig,
};
pub use json_contract::{DISPLAY_STATE_JSON_SCHEMA_V1, DisplayStateJsonContractV1};
pub use label_format::{format_date, format_fixed, format_rent_tick, tooltip_content};
pub use render_style::RenderStyle;
pub use snap_resolver::nearest_by_time;
