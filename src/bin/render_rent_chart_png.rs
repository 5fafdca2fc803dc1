use std::path::PathBuf;

use rent_chart::api::{ChartEngine, ChartEngineConfig};
use rent_chart::data::{CsvLoadOptions, RowErrorPolicy};
use rent_chart::render::CairoRenderer;
use tracing::{info, warn};

const USAGE: &str = "usage: render_rent_chart_png <data.csv> <out.png> \
[--config <config.json>] [--pointer-x <plot px>] [--date-format <pattern>] [--strict]";

#[derive(Debug)]
struct CliArgs {
    csv_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    pointer_x: Option<f64>,
    date_format: Option<String>,
    strict: bool,
}

fn main() {
    let _ = rent_chart::telemetry::init_default_tracing("info");
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => ChartEngineConfig::from_json_path(path)
            .map_err(|err| format!("failed to load config `{}`: {err}", path.display()))?,
        None => ChartEngineConfig::default(),
    };
    let width = i32::try_from(config.viewport.width)
        .map_err(|_| "viewport width overflows i32".to_owned())?;
    let height = i32::try_from(config.viewport.height)
        .map_err(|_| "viewport height overflows i32".to_owned())?;
    let renderer = CairoRenderer::new(width, height).map_err(|err| err.to_string())?;

    let mut options = CsvLoadOptions::default();
    if let Some(pattern) = &args.date_format {
        options = options.with_date_format(pattern.as_str());
    }
    if args.strict {
        options = options.with_error_policy(RowErrorPolicy::Fail);
    }

    let (mut engine, rejected) =
        ChartEngine::from_csv_path(renderer, config, &args.csv_path, &options).map_err(|err| {
            format!("failed to load `{}`: {err}", args.csv_path.display())
        })?;
    if !rejected.is_empty() {
        warn!(rejected = rejected.len(), "some csv rows were skipped");
    }

    if let Some(pointer_x) = args.pointer_x {
        let display = engine
            .pointer_move(pointer_x)
            .map_err(|err| format!("failed to resolve pointer: {err}"))?;
        if let Some(pointer) = display.pointer {
            info!(
                date = %pointer.nearest.date,
                rent = pointer.nearest.rent,
                "hovering nearest point"
            );
        }
    }

    engine.render().map_err(|err| err.to_string())?;
    engine
        .renderer()
        .write_png(&args.output_path)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output_path.display()))?;
    info!(
        output = %args.output_path.display(),
        points = engine.state().series().len(),
        "rendered rent chart"
    );
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional: Vec<String> = Vec::new();
    let mut config_path: Option<PathBuf> = None;
    let mut pointer_x: Option<f64> = None;
    let mut date_format: Option<String> = None;
    let mut strict = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--pointer-x" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --pointer-x".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|_| format!("invalid --pointer-x value `{value}`"))?;
                pointer_x = Some(parsed);
            }
            "--date-format" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --date-format".to_owned())?;
                date_format = Some(value);
            }
            "--strict" => strict = true,
            "-h" | "--help" => return Err(USAGE.to_owned()),
            other if other.starts_with("--") => {
                return Err(format!("unknown flag `{other}`\n{USAGE}"));
            }
            _ => positional.push(arg),
        }
    }

    let [csv_path, output_path] = <[String; 2]>::try_from(positional)
        .map_err(|_| USAGE.to_owned())?;
    Ok(CliArgs {
        csv_path: PathBuf::from(csv_path),
        output_path: PathBuf::from(output_path),
        config_path,
        pointer_x,
        date_format,
        strict,
    })
}
