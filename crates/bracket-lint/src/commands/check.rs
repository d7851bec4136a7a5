//! Check command — balanced-bracket validation of a file, stdin, or text.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use bracket_lint_core::{BracketsValidator, Config, MatchStrategy};

use super::{read_input_file, read_input_stdin};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// File to check (`-` or omitted reads stdin).
    pub file: Option<Utf8PathBuf>,

    /// Check this text instead of reading a file.
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Bracket pair such as "()" (repeatable; replaces configured pairs)
    #[arg(short, long = "pair", value_name = "PAIR")]
    pub pairs: Vec<String>,

    /// Ignorable character (repeatable; replaces configured symbols)
    #[arg(short, long = "ignore", value_name = "CHAR")]
    pub ignore: Vec<char>,

    /// Treat no character as ignorable
    #[arg(long, conflicts_with = "ignore")]
    pub no_ignore: bool,

    /// Balance algorithm
    #[arg(long, value_enum)]
    pub strategy: Option<MatchStrategy>,
}

impl CheckArgs {
    /// Build a validator from `config` with command-line overrides applied.
    fn validator(&self, config: &Config) -> anyhow::Result<BracketsValidator> {
        let mut config = config.clone();
        if !self.pairs.is_empty() {
            config.bracket_pairs = Some(self.pairs.clone());
        }
        if self.no_ignore {
            config.ignorable_symbols = Some(Vec::new());
        } else if !self.ignore.is_empty() {
            config.ignorable_symbols = Some(self.ignore.clone());
        }
        if let Some(strategy) = self.strategy {
            config.strategy = Some(strategy);
        }
        config
            .validator()
            .context("invalid bracket configuration")
    }

    /// Read the input to check, returning a label for messages and the content.
    fn read_input(&self, max_input_bytes: Option<usize>) -> anyhow::Result<(String, String)> {
        if let Some(ref text) = self.text {
            if max_input_bytes.is_some_and(|max| text.len() > max) {
                bail!("input too large: --text exceeds the input limit");
            }
            return Ok(("text".to_string(), text.clone()));
        }
        match self.file {
            Some(ref path) if path.as_str() != "-" => {
                Ok((path.to_string(), read_input_file(path, max_input_bytes)?))
            }
            _ => Ok(("stdin".to_string(), read_input_stdin(max_input_bytes)?)),
        }
    }
}

/// Check whether the input's brackets are balanced.
///
/// Unbalanced input is an error so the process exits non-zero, except with
/// `--json`, where the report carries the verdict.
#[instrument(name = "cmd_check", skip_all, fields(file = ?args.file))]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    debug!(
        pairs = ?args.pairs,
        ignore = ?args.ignore,
        no_ignore = args.no_ignore,
        strategy = ?args.strategy,
        "executing check command"
    );

    let validator = args.validator(config)?;
    let (label, content) = args.read_input(config.input_limit())?;

    let report = validator
        .report(&content)
        .with_context(|| format!("failed to check {label}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !report.balanced {
        bail!(
            "{} has unbalanced brackets ({} of {} unmatched)",
            label,
            report.unmatched.red(),
            report.bracket_count,
        );
    } else {
        println!("{} {} is balanced", "PASS:".green(), label);
    }

    Ok(())
}
