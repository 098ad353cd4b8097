use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use cartesian_plane::api::{CommandOutcome, CommandSession, GraphManager, GraphProperties};
use cartesian_plane::core::{BoundingRect, PlotStyle};
use cartesian_plane::render::NullRenderer;
use cartesian_plane::telemetry::init_default_tracing;

const USAGE: &str = "Usage: plot_script [--path] [--frame <width>x<height>] [--properties <json>] [script]";

struct CliArgs {
    script_path: Option<PathBuf>,
    style: PlotStyle,
    frame_size: Option<(f64, f64)>,
    properties_path: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}

/// Returns `Ok(false)` when at least one command failed.
fn run() -> Result<bool, String> {
    let args = parse_args()?;
    let script = match &args.script_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            input
        }
    };
    let properties = match &args.properties_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            GraphProperties::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => GraphProperties::default(),
    };

    let mut session = CommandSession::new().with_style(args.style);
    let mut all_ok = true;
    for (index, line) in script.lines().enumerate() {
        match session.execute(line) {
            Ok(CommandOutcome::Noop) => {}
            Ok(CommandOutcome::Exit) => break,
            Ok(outcome) => print_json(&outcome)?,
            Err(err) => {
                all_ok = false;
                eprintln!("line {}: {err}", index + 1);
            }
        }
    }

    if let Some((width, height)) = args.frame_size {
        let rect = BoundingRect::new(0.0, 0.0, width, height).map_err(|err| err.to_string())?;
        let manager =
            GraphManager::new(NullRenderer::default(), properties).map_err(|err| err.to_string())?;
        let frame = manager
            .build_render_frame(rect, Some(session.equation()))
            .map_err(|err| err.to_string())?;
        print_json(&frame)?;
    }

    Ok(all_ok)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let line =
        serde_json::to_string(value).map_err(|err| format!("failed to serialize output: {err}"))?;
    println!("{line}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut script_path = None;
    let mut style = PlotStyle::Points;
    let mut frame_size = None;
    let mut properties_path = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--path" => style = PlotStyle::Path,
            "--frame" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --frame".to_owned())?;
                frame_size = Some(parse_frame_size(&value)?);
            }
            "--properties" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --properties".to_owned())?;
                properties_path = Some(PathBuf::from(value));
            }
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => return Err(format!("unknown argument `{arg}`")),
            _ if script_path.is_none() => script_path = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument `{arg}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        script_path,
        style,
        frame_size,
        properties_path,
    })
}

fn parse_frame_size(value: &str) -> Result<(f64, f64), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("invalid frame size `{value}`: {err}"))
    };
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("frame size `{value}` must look like 640x480"))?;
    Ok((parse(width)?, parse(height)?))
}
