//! CLI argument definitions

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::consts::DEFAULT_INTERVAL_SECS;

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
#[command(name = "slotwatch")]
#[command(about = "Watch the 42 intra for correction slots and get notified", version)]
pub(crate) struct Args {
    /// Project to watch, e.g. "libft" (prompted for when omitted)
    #[arg(short, long)]
    pub(crate) project: Option<String>,

    /// Team id the slot must belong to (prompted for when omitted)
    #[arg(short, long)]
    pub(crate) team_id: Option<String>,

    /// Intra session cookie value (prompted for when omitted)
    #[arg(long, env = "INTRA_SESSION_TOKEN", hide_env_values = true)]
    pub(crate) token: Option<String>,

    /// Accept slots up to this many days ahead (prompted for when omitted)
    #[arg(short, long)]
    pub(crate) days: Option<u32>,

    /// Seconds between polls
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INTERVAL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) interval: u64,

    /// Stop after the first notification instead of watching for more
    #[arg(long)]
    pub(crate) once: bool,

    /// Give up after this many consecutive failed polls (0 = keep trying)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub(crate) max_failures: u32,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,
}

impl Args {
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
}
