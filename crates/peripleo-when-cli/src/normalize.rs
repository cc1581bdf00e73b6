//! Reads inputs, normalizes them, and writes one output line per input.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{Context, Result};
use peripleo_when::{
    parse_when_json, parse_when_with_options, LabelOptions, NormalizedRange, When,
};
use serde_json::Value;
use tracing::{debug, info};

use crate::cli::Cli;

/// How each normalized value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    PrettyJson,
    Label,
}

impl OutputFormat {
    fn from_cli(cli: &Cli) -> Self {
        if cli.label_only {
            OutputFormat::Label
        } else if cli.pretty {
            OutputFormat::PrettyJson
        } else {
            OutputFormat::Json
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let options = LabelOptions {
        era: cli.era.into(),
    };
    let format = OutputFormat::from_cli(&cli);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.inputs.is_empty() {
        info!("reading inputs from stdin");
        for (index, line) in io::stdin().lock().lines().enumerate() {
            let line = line.context("failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let range = normalize_input(line, &options)
                .with_context(|| format!("line {}: '{}'", index + 1, line))?;
            write_range(&mut out, range.as_ref(), format)?;
        }
    } else {
        for (index, input) in cli.inputs.iter().enumerate() {
            let range = normalize_input(input, &options)
                .with_context(|| format!("input #{}: '{}'", index + 1, input))?;
            write_range(&mut out, range.as_ref(), format)?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}

/// Normalize one raw input, decoding it as JSON when possible and as a text
/// scalar otherwise.
pub fn normalize_input(raw: &str, options: &LabelOptions) -> Result<Option<NormalizedRange>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => Ok(parse_when_json(&value, options)?),
        Err(_) => {
            debug!(input = raw, "not JSON, treating as text");
            Ok(parse_when_with_options(Some(&When::from(raw)), options))
        }
    }
}

fn write_range(
    out: &mut impl Write,
    range: Option<&NormalizedRange>,
    format: OutputFormat,
) -> Result<()> {
    let line = match format {
        OutputFormat::Json => serde_json::to_string(&range)?,
        OutputFormat::PrettyJson => serde_json::to_string_pretty(&range)?,
        OutputFormat::Label => range.and_then(|r| r.label.clone()).unwrap_or_default(),
    };
    writeln!(out, "{line}").context("failed to write output")?;
    Ok(())
}
