//! # mdtables
//!
//! A CLI tool that formats GFM tables in markdown files.
//!
//! ## Overview
//!
//! mdtables is built on top of mdtableslib and rewrites only what
//! table syntax needs: tables are padded into canonical aligned form
//! (or compacted with `--compact-tables`) and ambiguous dash-and-pipe
//! paragraph lines are escaped. All other content is left byte for
//! byte as it was.
//!
//! ## Usage
//!
//! ```bash
//! # Format all markdown files under the current directory
//! mdtables
//!
//! # Format specific files or trees
//! mdtables README.md docs/
//!
//! # Verify formatting without writing (exit 1 on drift)
//! mdtables --check docs/
//!
//! # Skip cell padding
//! mdtables --compact-tables README.md
//!
//! # Filter files with glob patterns
//! mdtables . --include "docs/**" --exclude "**/vendor/**"
//!
//! # Read from stdin, write to stdout
//! cat notes.md | mdtables -
//!
//! # Machine-readable report
//! mdtables --check --output json docs/
//! ```
//!
//! Defaults can be set in a `.mdtables.toml` discovered upward from
//! the current directory; command-line flags win over config values.

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::style;
use mdtableslib::{
    check_file, discover_files_in_dirs, reformat_file, reformat_str, Config, FilterConfig,
    FormatOptions,
};
use serde::Serialize;

/// Exit code for hard failures (I/O, bad config, bad globs).
const EXIT_ERROR: u8 = 2;
/// Exit code for `--check` finding unformatted files.
const EXIT_DRIFT: u8 = 1;

/// Per-file outcome for reports.
#[derive(Debug, Serialize)]
struct FileReport {
    /// Path as given on the walk
    path: String,
    /// Whether the file changed (or would change under --check)
    changed: bool,
}

/// Whole-run outcome for reports.
#[derive(Debug, Serialize)]
struct RunReport {
    /// Files inspected
    checked: usize,
    /// Files changed (or that would change under --check)
    changed: usize,
    files: Vec<FileReport>,
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("mdtables")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("GFM table formatter: pads and aligns markdown tables by display width")
        .arg(
            Arg::new("paths")
                .help("Files or directories to format; '-' reads stdin and writes stdout")
                .action(ArgAction::Append)
                .default_value("."),
        )
        .arg(
            Arg::new("compact-tables")
                .long("compact-tables")
                .action(ArgAction::SetTrue)
                .help("Skip cell padding; columns keep their natural width"),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .action(ArgAction::SetTrue)
                .help("Write nothing; exit 1 if any file would change"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Report format"),
        )
}

/// Resolve formatting options: CLI flag first, then config, then default.
fn resolve_options(matches: &ArgMatches, config: &Config) -> FormatOptions {
    let compact = if matches.get_flag("compact-tables") {
        true
    } else {
        config.compact_tables.unwrap_or(false)
    };
    FormatOptions::new().compact_tables(compact)
}

/// Build the file filter from config globs plus CLI globs.
fn build_filter(matches: &ArgMatches, config: &Config) -> Result<FilterConfig, anyhow::Error> {
    let mut filter = FilterConfig::new();

    for pattern in &config.include {
        filter = filter.include(pattern)?;
    }
    for pattern in &config.exclude {
        filter = filter.exclude(pattern)?;
    }

    if let Some(includes) = matches.get_many::<String>("include") {
        for pattern in includes {
            filter = filter.include(pattern)?;
        }
    }
    if let Some(excludes) = matches.get_many::<String>("exclude") {
        for pattern in excludes {
            filter = filter.exclude(pattern)?;
        }
    }

    Ok(filter)
}

/// Format or check stdin; output (when formatting) goes to stdout.
fn run_stdin(options: &FormatOptions, check: bool) -> Result<ExitCode, anyhow::Error> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let output = reformat_str(&input, options);

    if check {
        if output != input {
            eprintln!("stdin would be reformatted");
            return Ok(ExitCode::from(EXIT_DRIFT));
        }
        return Ok(ExitCode::SUCCESS);
    }

    print!("{output}");
    Ok(ExitCode::SUCCESS)
}

fn print_text_report(reports: &[FileReport], check: bool) {
    let verb = if check { "would reformat" } else { "reformatted" };
    for report in reports.iter().filter(|r| r.changed) {
        println!("{} {}", style(verb).yellow(), report.path);
    }

    let changed = reports.iter().filter(|r| r.changed).count();
    if reports.is_empty() {
        println!("{}", style("no markdown files found").dim());
    } else if changed == 0 {
        println!("{} file(s) already formatted", reports.len());
    } else if check {
        println!(
            "{} of {} file(s) would be reformatted",
            changed,
            reports.len()
        );
    } else {
        println!("{} of {} file(s) reformatted", changed, reports.len());
    }
}

fn run(matches: &ArgMatches) -> Result<ExitCode, anyhow::Error> {
    let check = matches.get_flag("check");
    let json = matches
        .get_one::<String>("output")
        .is_some_and(|mode| mode == "json");

    let cwd = std::env::current_dir()?;
    let config = Config::discover(&cwd)?.unwrap_or_default();
    let options = resolve_options(matches, &config);
    let filter = build_filter(matches, &config)?;

    let paths: Vec<String> = matches
        .get_many::<String>("paths")
        .map(|v| v.cloned().collect())
        .unwrap_or_else(|| vec![".".to_string()]);

    if paths.iter().any(|p| p == "-") {
        if paths.len() > 1 {
            anyhow::bail!("'-' cannot be combined with other paths");
        }
        return run_stdin(&options, check);
    }

    let roots: Vec<&Path> = paths.iter().map(Path::new).collect();
    let files = discover_files_in_dirs(&roots, &filter)?;

    let mut reports = Vec::with_capacity(files.len());
    for file in &files {
        let changed = if check {
            !check_file(file, &options)?
        } else {
            reformat_file(file, &options)?
        };
        reports.push(FileReport {
            path: file.display().to_string(),
            changed,
        });
    }

    let changed = reports.iter().filter(|r| r.changed).count();

    if json {
        let report = RunReport {
            checked: reports.len(),
            changed,
            files: reports,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text_report(&reports, check);
    }

    if check && changed > 0 {
        Ok(ExitCode::from(EXIT_DRIFT))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
