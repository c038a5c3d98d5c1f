//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "edcost")]
#[command(
    about = "Estimate the cost of translating educational materials (text, images, video)",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Text translation method: "token" (LLM) or "character" (traditional service)
    #[arg(short, long, global = true, value_name = "METHOD")]
    pub(crate) method: Option<String>,

    /// Number of text tokens or characters, depending on --method
    #[arg(
        short = 't',
        long,
        visible_aliases = ["tokens", "characters"],
        global = true,
        allow_negative_numbers = true,
        value_name = "N"
    )]
    pub(crate) text_units: Option<f64>,

    /// Cost in dollars per token or character
    #[arg(long, global = true, allow_negative_numbers = true, value_name = "DOLLARS")]
    pub(crate) text_rate: Option<f64>,

    /// Number of images
    #[arg(short, long, global = true, allow_negative_numbers = true, value_name = "N")]
    pub(crate) images: Option<i64>,

    /// Cost in dollars per image
    #[arg(long, global = true, allow_negative_numbers = true, value_name = "DOLLARS")]
    pub(crate) image_rate: Option<f64>,

    /// Total duration of all videos in seconds
    #[arg(short = 'v', long, global = true, allow_negative_numbers = true, value_name = "SECONDS")]
    pub(crate) video_seconds: Option<f64>,

    /// Cost in dollars per second of video
    #[arg(long, global = true, allow_negative_numbers = true, value_name = "DOLLARS")]
    pub(crate) video_rate: Option<f64>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Compact output (subtotals only)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Locale for number formatting (e.g., "en", "zh", "de")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Read settings from this file instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // For enum values, apply config only if CLI is at its default
        if let Some(color) = config.color {
            if self.color == ColorMode::Auto {
                self.color = match color {
                    ConfigColorMode::Auto => ColorMode::Auto,
                    ConfigColorMode::Always => ColorMode::Always,
                    ConfigColorMode::Never => ColorMode::Never,
                };
            }
        }

        // String options: only apply if CLI didn't set them
        if self.method.is_none() {
            self.method = config.method.clone();
        }
        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }
}
