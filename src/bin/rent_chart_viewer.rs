use std::path::{Path, PathBuf};

use gtk4 as gtk;
use gtk4::prelude::*;
use rent_chart::api::{ChartEngine, ChartEngineConfig};
use rent_chart::data::CsvLoadOptions;
use rent_chart::platform_gtk::GtkChartAdapter;
use rent_chart::render::CairoRenderer;
use tracing::{error, warn};

const USAGE: &str = "usage: rent_chart_viewer <data.csv> [config.json]";

fn main() {
    let _ = rent_chart::telemetry::init_default_tracing("info");

    let mut args = std::env::args().skip(1);
    let Some(csv_path) = args.next().map(PathBuf::from) else {
        eprintln!("{USAGE}");
        std::process::exit(2);
    };
    let config_path = args.next().map(PathBuf::from);

    let app = gtk::Application::builder()
        .application_id("rs.rent_chart.viewer")
        .build();
    app.connect_activate(move |app| build_ui(app, &csv_path, config_path.as_deref()));
    // GTK must not see our positional arguments.
    app.run_with_args::<&str>(&[]);
}

fn build_ui(app: &gtk::Application, csv_path: &Path, config_path: Option<&Path>) {
    let engine = match build_engine(csv_path, config_path) {
        Ok(engine) => engine,
        Err(err) => {
            error!(error = %err, "failed to initialize rent chart");
            app.quit();
            return;
        }
    };
    let viewport = engine.state().config().viewport;
    let title = engine.state().config().title.clone();

    let adapter = GtkChartAdapter::new(engine);
    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(title.as_str())
        .default_width(i32::try_from(viewport.width).unwrap_or(1200))
        .default_height(i32::try_from(viewport.height).unwrap_or(500))
        .child(adapter.drawing_area())
        .build();
    window.present();
}

fn build_engine(
    csv_path: &Path,
    config_path: Option<&Path>,
) -> Result<ChartEngine<CairoRenderer>, String> {
    let config = match config_path {
        Some(path) => ChartEngineConfig::from_json_path(path)
            .map_err(|err| format!("failed to load config `{}`: {err}", path.display()))?,
        None => ChartEngineConfig::default(),
    };
    let width = i32::try_from(config.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;

    let (engine, rejected) =
        ChartEngine::from_csv_path(renderer, config, csv_path, &CsvLoadOptions::default())
            .map_err(|err| format!("failed to load `{}`: {err}", csv_path.display()))?;
    for row in &rejected {
        warn!(line = row.line, error = %row.error, "skipped csv row");
    }
    Ok(engine)
}
