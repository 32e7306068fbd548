//! CLI argument definitions using clap

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use blocktext_core::config::Config;
use clap::CommandFactory;
use clap_complete::Shell;
use tracing::debug;

use crate::{color, input, output};

const EXAMPLES: &str = "\
Examples:
  blocktext HELLO
  blocktext -c red BUILD FAILED
  blocktext --color blue 'HELLO\\nWORLD'
  echo 'DEPLOYED' | blocktext -c green
  blocktext -- -LIVE-";

/// Render text as large block-character banners
#[derive(clap::Parser)]
#[command(name = "blocktext")]
#[command(author, version, about)]
#[command(long_about = "Render text as large block-character banners in your terminal.\n\n\
    Words are joined with spaces and a literal \\n starts a new line. When no text is \
    given, piped standard input is rendered instead.")]
#[command(after_help = EXAMPLES)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Text to render
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Foreground color (see --list-colors); unknown names fall back to orange
    #[arg(
        short,
        long,
        env = "BLOCKTEXT_COLOR",
        value_name = "NAME",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub color: Option<String>,

    /// Print the banner without color escape sequences
    #[arg(long)]
    pub no_color: bool,

    /// List available colors and exit
    #[arg(long)]
    pub list_colors: bool,

    /// List supported characters and exit
    #[arg(long)]
    pub list_glyphs: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        let use_color = !self.no_color;

        if let Some(shell) = self.completions {
            clap_complete::generate(shell, &mut Self::command(), "blocktext", &mut stdout);
            return Ok(());
        }
        if self.list_colors {
            return output::write_color_list(&mut stdout, use_color)
                .context("failed to write output");
        }
        if self.list_glyphs {
            return output::write_glyph_list(&mut stdout).context("failed to write output");
        }

        let config = Config::load_or_default(self.config.as_deref())
            .context("failed to load configuration")?;
        debug!(?config, "configuration loaded");

        let stdin = io::stdin();
        let raw = input::collect(
            &self.text,
            stdin.is_terminal(),
            stdin.lock(),
            config.default_text.as_deref(),
        )?;
        let text = input::expand_line_breaks(&raw);
        let art = blocktext_core::render(&text);

        let code = use_color
            .then(|| color::resolve(self.color.as_deref().or(config.color.as_deref())));
        output::write_banner(&mut stdout, &art, code).context("failed to write output")
    }
}
