#![deny(unsafe_code)]
//! CLI binary for the swatch color picker.
//!
//! Subcommands:
//! - `convert <color>`: print a color in one model, or in all of them
//! - `info <color>`: all models plus brightness and readable text color
//! - `lighter <color>` / `darker <color>`: shift HSL luminance
//! - `list`: print the supported model names

mod error;

use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use serde_json::{json, Map, Value};
use std::path::PathBuf;
use std::process;
use swatch_core::numeric::round_half_away;
use swatch_core::{
    AnyColor, ColorError, ColorEvent, ColorModel, FieldChange, PickerState, Settings,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatch", about = "Color model conversion CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Settings file. Supplies the color when none is given and remembers
    /// the last one.
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Read `rgb(...)` input on the 0-255 scale, so `--scaled` output reads
    /// back as the same color.
    #[arg(long, global = true)]
    scaled_input: bool,

    /// Log debug events to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a color to another model, or to every model.
    Convert {
        /// Color in any model's syntax (e.g. "#2196F3", "hsl(120, 50%, 25%)").
        color: Option<String>,

        /// Target model name (rgb, hex, hsl, hsv, cmyk, xyz, lab).
        #[arg(short, long)]
        to: Option<String>,

        /// Print RGB on the 0-255 scale. Pass `--scaled-input` to read such
        /// output back; plain `rgb(...)` input is tried as unit values first.
        #[arg(long)]
        scaled: bool,
    },
    /// Show a color in every model with its brightness and text color.
    Info {
        /// Color in any model's syntax.
        color: Option<String>,
    },
    /// Raise HSL luminance.
    Lighter {
        /// Color in any model's syntax.
        color: Option<String>,

        /// Percentage points to add (defaults to the settings' step).
        #[arg(short, long)]
        step: Option<f64>,
    },
    /// Lower HSL luminance.
    Darker {
        /// Color in any model's syntax.
        color: Option<String>,

        /// Percentage points to subtract (defaults to the settings' step).
        #[arg(short, long)]
        step: Option<f64>,
    },
    /// List supported color models.
    List,
}

fn init_logging(verbose: u8) {
    let filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses the color argument, falling back to the last color in settings.
/// With `scaled_input`, `rgb(...)` is read on the 0-255 scale only.
fn resolve_color(
    arg: Option<&str>,
    scaled_input: bool,
    settings: &Settings,
) -> Result<AnyColor, CliError> {
    match arg {
        Some(text) if scaled_input => AnyColor::parse_scaled(text)
            .ok_or_else(|| CliError::Color(ColorError::InvalidColor(text.to_string()))),
        Some(text) => Ok(text.parse::<AnyColor>()?),
        None => settings.last_color.ok_or_else(|| {
            CliError::Input("no color given and no last color in settings".into())
        }),
    }
}

/// Renders `color` in `model`. With `scaled`, RGB uses the 0-255 form.
fn format_in(color: AnyColor, model: ColorModel, scaled: bool) -> String {
    match model {
        ColorModel::Rgb if scaled => color.to_rgb().to_scaled_string(),
        _ => color.to_model(model).to_string(),
    }
}

fn all_models(color: AnyColor, scaled: bool) -> Vec<(ColorModel, String)> {
    ColorModel::ALL
        .into_iter()
        .map(|m| (m, format_in(color, m, scaled)))
        .collect()
}

fn models_json(rows: &[(ColorModel, String)]) -> Value {
    let map: Map<String, Value> = rows
        .iter()
        .map(|(m, s)| (m.name().to_string(), Value::String(s.clone())))
        .collect();
    Value::Object(map)
}

fn print_models(rows: &[(ColorModel, String)]) {
    for (model, text) in rows {
        println!("  {:<10} {text}", model.name());
    }
}

fn check_step(step: f64) -> Result<f64, CliError> {
    if !step.is_finite() || step <= 0.0 || step > 100.0 {
        return Err(CliError::Input(format!(
            "step must be in (0, 100], got {step}"
        )));
    }
    Ok(step)
}

/// Shifts luminance through a picker state so the edit follows the same
/// path a picker UI takes. The result stays in the input's model.
fn shift_luminance(color: AnyColor, delta: f64) -> AnyColor {
    let mut state = PickerState::new(color, color.model());
    state.subscribe(|event: &ColorEvent| {
        debug!(color = %event.color, change = ?event.change, "luminance shifted");
    });
    let luminance = color.to_hsl().luminance();
    state.apply(FieldChange::HslLuminance(luminance + delta));
    state.active_color()
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let last = match cli.command {
        Command::List => {
            let names = ColorModel::list_names();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&json!({ "models": names }))?);
            } else {
                println!("Models:");
                for name in names {
                    println!("  {name}");
                }
            }
            None
        }
        Command::Convert { color, to, scaled } => {
            let color = resolve_color(color.as_deref(), cli.scaled_input, &settings)?;
            match to {
                Some(name) => {
                    let model = ColorModel::from_name(&name)?;
                    let text = format_in(color, model, scaled);
                    if cli.json {
                        let info = json!({
                            "input": color.to_string(),
                            "model": model,
                            "output": text,
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        println!("{text}");
                    }
                }
                None => {
                    let rows = all_models(color, scaled);
                    if cli.json {
                        let info = json!({
                            "input": color.to_string(),
                            "model": color.model(),
                            "output": models_json(&rows),
                        });
                        println!("{}", serde_json::to_string_pretty(&info)?);
                    } else {
                        print_models(&rows);
                    }
                }
            }
            Some(color)
        }
        Command::Info { color } => {
            let color = resolve_color(color.as_deref(), cli.scaled_input, &settings)?;
            let rgb = color.to_rgb();
            let rows = all_models(color, false);
            let brightness = round_half_away(rgb.brightness(), 2);
            let text = rgb.contrasting_text().to_hex();
            if cli.json {
                let info = json!({
                    "input": color.to_string(),
                    "models": models_json(&rows),
                    "brightness": brightness,
                    "contrasting_text": text,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print_models(&rows);
                println!("  {:<10} {brightness}", "brightness");
                println!("  {:<10} {text}", "text");
            }
            Some(color)
        }
        Command::Lighter { color, step } => {
            let input = resolve_color(color.as_deref(), cli.scaled_input, &settings)?;
            Some(shift(cli.json, input, step, 1.0, &settings)?)
        }
        Command::Darker { color, step } => {
            let input = resolve_color(color.as_deref(), cli.scaled_input, &settings)?;
            Some(shift(cli.json, input, step, -1.0, &settings)?)
        }
    };

    if let (Some(path), Some(color)) = (&cli.settings, last) {
        settings.record(color);
        settings.save(path)?;
    }

    Ok(())
}

/// Runs `lighter` (`sign` 1) or `darker` (`sign` -1) and prints the result.
fn shift(
    json: bool,
    input: AnyColor,
    step: Option<f64>,
    sign: f64,
    settings: &Settings,
) -> Result<AnyColor, CliError> {
    let step = check_step(step.unwrap_or(settings.lightness_step))?;
    let output = shift_luminance(input, sign * step);
    if json {
        let info = json!({
            "input": input.to_string(),
            "output": output.to_string(),
            "step": step,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{output}");
    }
    Ok(output)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
