pub mod line_series;
pub mod primitives;
pub mod rent_scale;
pub mod scale;
pub mod series;
pub mod time_scale;
pub mod types;

pub use line_series::project_line_path;
pub use primitives::{date_to_day_number, day_number_to_date, day_number_to_datetime};
pub use rent_scale::RentScale;
pub use scale::LinearScale;
pub use series::RentSeries;
pub use time_scale::TimeScale;
pub use types::{DataPoint, PlotArea, PlotMargins, Viewport};
