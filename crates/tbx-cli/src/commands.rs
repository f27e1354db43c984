use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tbx_diff::{compare, compare_inline, diff_chars, diff_words, DiffSegment};
use tracing::debug;

use crate::cli::*;
use crate::render;
use crate::settings;

/// Outcome of a command, mapped onto the process exit status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The inputs differ and `--exit-code` was requested.
    Differences,
}

impl Status {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Status::Success => ExitCode::SUCCESS,
            Status::Differences => ExitCode::from(1),
        }
    }
}

pub fn run_command<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<Status> {
    apply_color(cli.color);
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format, out),
        Command::Words(args) => cmd_segments(&diff_words(&args.left, &args.right), &cli.format, out),
        Command::Chars(args) => cmd_segments(&diff_chars(&args.left, &args.right), &cli.format, out),
    }
}

fn apply_color(choice: ColorChoice) {
    match choice {
        ColorChoice::Always => colored::control::set_override(true),
        ColorChoice::Never => colored::control::set_override(false),
        ColorChoice::Auto => {}
    }
}

/// Read a whole input, treating `-` as stdin.
fn read_input(path: &Path) -> anyhow::Result<String> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

fn cmd_diff<W: Write>(args: DiffArgs, format: &OutputFormat, out: &mut W) -> anyhow::Result<Status> {
    if args.left == Path::new("-") && args.right == Path::new("-") {
        anyhow::bail!("only one input can be read from stdin");
    }
    let config = settings::resolve(&args)?;
    let mut left = read_input(&args.left)?;
    let mut right = read_input(&args.right)?;
    if args.swap {
        std::mem::swap(&mut left, &mut right);
    }

    let report = if args.inline {
        compare_inline(&left, &right, &config)?
    } else {
        compare(&left, &right, &config)?
    };

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if args.unified {
                render::unified(out, &report)?;
            } else {
                render::side_by_side(out, &report, args.width)?;
            }
            render::summary(out, report.stats())?;
        }
    }

    if args.exit_code && !report.is_identical() {
        Ok(Status::Differences)
    } else {
        Ok(Status::Success)
    }
}

fn cmd_segments<W: Write>(
    segments: &[DiffSegment],
    format: &OutputFormat,
    out: &mut W,
) -> anyhow::Result<Status> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, segments)?;
            writeln!(out)?;
        }
        OutputFormat::Text => render::segments(out, segments)?,
    }
    Ok(Status::Success)
}
