use std::fs;
use std::path::PathBuf;

use candle_layout::core::CandleSeries;
use candle_layout::render::{NullRenderer, Renderer};
use candle_layout::telemetry::init_default_tracing;
use candle_layout::{ChartLayoutEngine, LayoutConfig};

const USAGE: &str = "usage: draw_plan_dump --input <quotes.json> [--width <px>] [--config <config.json>] [--newest-first] [--output <path>]";
const DEFAULT_WIDTH: u32 = 1280;

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    width: u32,
    newest_first: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let _ = init_default_tracing();

    let config = match &args.config {
        Some(path) => LayoutConfig::from_json_str(&read(path)?).map_err(|e| e.to_string())?,
        None => LayoutConfig::default(),
    };
    let engine = ChartLayoutEngine::new(config).map_err(|e| e.to_string())?;
    let series = CandleSeries::from_json_quotes(&read(&args.input)?, args.newest_first)
        .map_err(|e| e.to_string())?;
    let viewport = engine.viewport_for_width(args.width);

    let Some(plan) = engine.layout(&series, viewport).map_err(|e| e.to_string())? else {
        return Err(format!(
            "not enough history: {} candles for a {}px wide chart",
            series.len(),
            viewport.width
        ));
    };
    NullRenderer::default()
        .render(&plan)
        .map_err(|e| e.to_string())?;

    let json = plan.to_json_contract_v1_pretty().map_err(|e| e.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut width = DEFAULT_WIDTH;
    let mut newest_first = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --width".to_owned())?;
                width = value
                    .parse()
                    .map_err(|err| format!("invalid --width `{value}`: {err}"))?;
            }
            "--newest-first" => newest_first = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        config,
        width,
        newest_first,
    })
}
