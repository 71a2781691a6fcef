#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use showcase_core::{colors_for, SiteContent, ThemeMode};
use tracing_subscriber::EnvFilter;

use crate::context::{LaunchConfig, ThemePreference};

/// Launch configuration, set once from the command line
static LAUNCH: OnceLock<LaunchConfig> = OnceLock::new();

/// Get the launch configuration (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH.get().cloned().unwrap_or_default()
}

/// Initial theme selection on the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum ThemeArg {
    /// Follow the system color scheme
    #[default]
    System,
    Light,
    Dark,
}

impl From<ThemeArg> for ThemePreference {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::System => ThemePreference::System,
            ThemeArg::Light => ThemePreference::Fixed(ThemeMode::Light),
            ThemeArg::Dark => ThemePreference::Fixed(ThemeMode::Dark),
        }
    }
}

/// Showcase - light/dark theme showcase page
#[derive(Parser, Debug)]
#[command(name = "showcase-desktop")]
#[command(about = "Showcase - semantic color palette in light and dark")]
struct Args {
    /// Initial theme; "light" or "dark" also stop following the system
    #[arg(short, long, value_enum, default_value_t = ThemeArg::System)]
    theme: ThemeArg,

    /// JSON file with page content (defaults to <config dir>/showcase/content.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Window title
    #[arg(long, default_value = "Showcase")]
    title: String,

    /// Print both color sets as JSON and exit
    #[arg(long)]
    print_palette: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.print_palette {
        println!("{}", palette_json()?);
        return Ok(());
    }

    let content = resolve_content(args.content.as_deref(), default_content_path().as_deref())?;
    let theme = ThemePreference::from(args.theme);

    tracing::info!(
        ?theme,
        steps = content.pipeline.len(),
        features = content.features.len(),
        "Starting '{}'",
        args.title
    );

    let _ = LAUNCH.set(LaunchConfig { theme, content });

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

/// `<config dir>/showcase/content.json`
fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showcase").join("content.json"))
}

/// Pick the page content.
///
/// An explicit path must load. The default path is optional: a missing file
/// means built-in content, a broken one is logged and skipped.
fn resolve_content(explicit: Option<&Path>, default_path: Option<&Path>) -> Result<SiteContent> {
    if let Some(path) = explicit {
        return SiteContent::load(path)
            .with_context(|| format!("loading content from {}", path.display()));
    }

    match default_path {
        Some(path) if path.exists() => match SiteContent::load(path) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!("Ignoring content file {}: {}", path.display(), e);
                Ok(SiteContent::default())
            }
        },
        _ => Ok(SiteContent::default()),
    }
}

/// Both color sets keyed by mode name.
fn palette_json() -> Result<String> {
    let palette = serde_json::json!({
        "light": colors_for(ThemeMode::Light),
        "dark": colors_for(ThemeMode::Dark),
    });
    Ok(serde_json::to_string_pretty(&palette)?)
}
