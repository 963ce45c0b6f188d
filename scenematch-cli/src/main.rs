use clap::Parser;
use scenematch::io::load_rgba_image;
use scenematch::{ColorTarget, MatchConfig, MatchResult, Matcher, TemplateStore};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "SceneMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
enum Mode {
    #[default]
    Template,
    Color,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ColorConfigJson {
    r: u8,
    g: u8,
    b: u8,
    tolerance: u32,
}

impl Default for ColorConfigJson {
    fn default() -> Self {
        Self {
            r: 255,
            g: 0,
            b: 0,
            tolerance: scenematch::DEFAULT_COLOR_TOLERANCE,
        }
    }
}

impl From<&ColorConfigJson> for ColorTarget {
    fn from(value: &ColorConfigJson) -> Self {
        ColorTarget::rgb(value.r, value.g, value.b).with_tolerance(value.tolerance)
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct MatchConfigJson {
    scan_step: usize,
    sample_step: usize,
    early_exit_score: Option<f64>,
    color_step: usize,
    parallel: bool,
}

impl Default for MatchConfigJson {
    fn default() -> Self {
        let cfg = MatchConfig::default();
        Self {
            scan_step: cfg.scan_step,
            sample_step: cfg.sample_step,
            early_exit_score: cfg.early_exit_score,
            color_step: cfg.color_step,
            parallel: cfg.parallel,
        }
    }
}

impl From<&MatchConfigJson> for MatchConfig {
    fn from(value: &MatchConfigJson) -> Self {
        Self {
            scan_step: value.scan_step,
            sample_step: value.sample_step,
            early_exit_score: value.early_exit_score,
            color_step: value.color_step,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Config {
    template_path: String,
    scene_path: String,
    mode: Mode,
    threshold: f64,
    color: ColorConfigJson,
    #[serde(rename = "match")]
    match_cfg: MatchConfigJson,
    output_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template_path: String::new(),
            scene_path: String::new(),
            mode: Mode::Template,
            threshold: 0.7,
            color: ColorConfigJson::default(),
            match_cfg: MatchConfigJson::default(),
            output_path: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    found: bool,
    x: f32,
    y: f32,
    confidence: f32,
}

impl From<MatchResult> for MatchRecord {
    fn from(value: MatchResult) -> Self {
        Self {
            found: value.found,
            x: value.x,
            y: value.y,
            confidence: value.confidence,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum Output {
    Template { result: MatchRecord },
    Color { hits: Vec<MatchRecord> },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("scenematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.scene_path.is_empty() {
        return Err("scene_path must be set in the config".into());
    }
    if config.mode == Mode::Template && config.template_path.is_empty() {
        return Err("template_path must be set in template mode".into());
    }

    let store = Arc::new(TemplateStore::new());
    let matcher = Matcher::new(Arc::clone(&store)).with_config((&config.match_cfg).into());
    let scene = load_rgba_image(&config.scene_path)?;

    let output = match config.mode {
        Mode::Template => {
            store.load_template(&config.template_path).await?;
            let result = matcher.detect(scene.view(), config.threshold)?;
            tracing::info!(found = result.found, confidence = result.confidence, "detection done");
            Output::Template {
                result: result.into(),
            }
        }
        Mode::Color => {
            let hits = matcher
                .detect_by_color(scene.view(), (&config.color).into())?
                .map(MatchRecord::from)
                .collect::<Vec<_>>();
            tracing::info!(hits = hits.len(), "color scan done");
            Output::Color { hits }
        }
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
