//! CLI subcommand definitions

use clap::Subcommand;

/// Ways to present an estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Subcommand)]
pub(crate) enum Commands {
    /// Show the cost summary table (default)
    #[default]
    Estimate,
    /// Show a detailed per-category breakdown with unit prices
    Breakdown,
    /// Output single line for statusline/tmux integration
    Statusline,
}
