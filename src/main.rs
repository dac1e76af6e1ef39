// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Command-line interface for the post-slug binary.
//!
//! `post-slug <STRING> [SEPARATOR] [PRESERVE_CASE] [MAX_LEN]` prints the slug
//! for a single string. `--input-file` slugs every line of a file instead and
//! `--json` switches the output to JSON records.

use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, CommandFactory, Parser};
use post_slug::{Error, SlugOptions, SlugRecord, io_error, post_slug_lossy, slug_all, slug_records};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Command line interface for converting strings into slugs.
#[derive(Debug, Parser,)]
#[command(name = "post-slug", version, about = "Convert a string into a URL or filename friendly slug")]
struct Cli
{
    /// String to convert into a slug.
    #[arg(value_name = "STRING", allow_hyphen_values = true, value_parser = clap::value_parser!(OsString))]
    input: Option<OsString,>,

    /// Separator placed between words; only the first character is used.
    #[arg(value_name = "SEPARATOR", allow_hyphen_values = true)]
    separator: Option<String,>,

    /// Keep the original letter casing (0 or 1; any non-zero integer is true).
    #[arg(value_name = "PRESERVE_CASE", value_parser = parse_preserve_case)]
    preserve_case: Option<bool,>,

    /// Maximum slug length; 0 disables truncation.
    #[arg(value_name = "MAX_LEN")]
    max_len: Option<usize,>,

    /// YAML file providing defaults for omitted positional arguments.
    #[arg(long = "config", value_name = "PATH", env = "POST_SLUG_CONFIG")]
    config: Option<PathBuf,>,

    /// Slug every line of the file instead of a single string.
    #[arg(long = "input-file", value_name = "PATH")]
    input_file: Option<PathBuf,>,

    /// Emit JSON records instead of bare slugs.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,
}

/// Reads the preserve-case flag as an integer (non-zero is true) or as one of
/// the usual boolean words.
fn parse_preserve_case(raw: &str,) -> Result<bool, String,>
{
    let trimmed = raw.trim();
    if let Ok(number,) = trimmed.parse::<i64>() {
        return Ok(number != 0,);
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "on" => Ok(true,),
        "false" | "f" | "no" | "n" | "off" => Ok(false,),
        _ => Err(format!("expected an integer or a boolean, got '{raw}'"),),
    }
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env(),)
        .with_writer(io::stderr,)
        .init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Returns [`Error::Validation`] when no input was supplied and propagates
/// option loading, input reading and output errors.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    execute(&cli, &mut handle,)
}

fn execute<W: io::Write,>(cli: &Cli, writer: &mut W,) -> Result<(), Error,>
{
    let options = resolve_options(cli,)?;
    debug!(?options, "resolved slug options");

    match (cli.input_file.as_deref(), cli.input.as_ref(),) {
        (Some(_,), Some(_,),) => {
            Err(Error::validation("<STRING> cannot be combined with --input-file",),)
        }
        (Some(path,), None,) => run_batch(writer, path, &options, cli.json,),
        (None, Some(input,),) => run_single(writer, input, &options, cli.json,),
        (None, None,) => Err(Error::validation(missing_input_message(),),),
    }
}

fn missing_input_message() -> String
{
    let usage = Cli::command().render_usage();
    format!("missing required <STRING> argument\n{usage}")
}

/// Layers positional arguments over the option file over built-in defaults.
fn resolve_options(cli: &Cli,) -> Result<SlugOptions, Error,>
{
    let mut options = match cli.config.as_deref() {
        Some(path,) => SlugOptions::load(path,)?,
        None => SlugOptions::default(),
    };

    if let Some(separator,) = cli.separator.as_deref() {
        options.separator = SlugOptions::separator_from_str(separator,);
    }
    if let Some(preserve_case,) = cli.preserve_case {
        options.preserve_case = preserve_case;
    }
    if let Some(max_len,) = cli.max_len {
        options.max_len = max_len;
    }

    Ok(options,)
}

fn run_single<W: io::Write,>(
    writer: &mut W,
    input: &OsString,
    options: &SlugOptions,
    json: bool,
) -> Result<(), Error,>
{
    let slug = post_slug_lossy(input.as_encoded_bytes(), options,);

    if json {
        let record = SlugRecord {
            input: input.to_string_lossy().into_owned(),
            slug,
        };
        serde_json::to_writer(&mut *writer, &record,)?;
        writeln!(writer)?;
    } else {
        writeln!(writer, "{slug}")?;
    }

    Ok((),)
}

fn run_batch<W: io::Write,>(
    writer: &mut W,
    path: &Path,
    options: &SlugOptions,
    json: bool,
) -> Result<(), Error,>
{
    let bytes = fs::read(path,).map_err(|source| io_error(path, source,),)?;
    let contents = String::from_utf8_lossy(&bytes,);
    let lines: Vec<&str,> = contents.lines().collect();
    debug!("read {} lines from {}", lines.len(), path.display());

    if json {
        let records = slug_records(&lines, options,);
        serde_json::to_writer(&mut *writer, &records,)?;
        writeln!(writer)?;
    } else {
        for slug in slug_all(&lines, options,) {
            writeln!(writer, "{slug}")?;
        }
    }

    Ok((),)
}
