mod picker;
mod render;

use std::io::{self, IsTerminal};

use chrono::NaiveDate;
use tzoverlap::{Context, WorkWindow, compute_overlap};

use crate::render::ansi::Palette;

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let palette = Palette::new(config.color);
    let (zone_a, zone_b) = match config.zones {
        Some(pair) => pair,
        None => match pick_zones(&palette) {
            Ok(Some(pair)) => pair,
            // User quit the picker; that is normal completion.
            Ok(None) => return,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
    };

    let ctx = match config.reference_date {
        Some(reference_date) => Context { reference_date },
        None => Context::default(),
    };

    let result = match compute_overlap(&zone_a, &zone_b, WorkWindow::default(), &ctx) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    render::print_overlap(&result, config.color);
}

fn pick_zones(palette: &Palette) -> io::Result<Option<(String, String)>> {
    let Some(first) = picker::pick_zone("Select your timezone:", palette)? else {
        return Ok(None);
    };
    let Some(second) = picker::pick_zone("Select the other timezone:", palette)? else {
        return Ok(None);
    };
    Ok(Some((first.identifier.to_string(), second.identifier.to_string())))
}

struct CliConfig {
    zones: Option<(String, String)>,
    reference_date: Option<NaiveDate>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut positional: Vec<String> = Vec::new();
    let mut reference_date: Option<NaiveDate> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("tzoverlap {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--date" => {
                let value = args.next().ok_or_else(|| "error: --date expects a value".to_string())?;
                reference_date = Some(parse_date(&value)?);
            }
            _ if arg.starts_with("--date=") => {
                let value = arg.trim_start_matches("--date=");
                reference_date = Some(parse_date(value)?);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => positional.push(arg),
        }
    }

    let zones = match positional.len() {
        0 => None,
        2 => {
            let mut it = positional.into_iter();
            Some((it.next().unwrap_or_default(), it.next().unwrap_or_default()))
        }
        _ => {
            return Err(format!(
                "error: expected zero or two timezone arguments\n\n{}",
                help_text()
            ));
        }
    };

    Ok(CliConfig { zones, reference_date, color })
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --date '{value}' (expected YYYY-MM-DD)"))
}

fn help_text() -> String {
    format!(
        "tzoverlap {version}

Find overlapping working hours (09:00–17:00 local) between two timezones.

Usage:
  tzoverlap [OPTIONS]
  tzoverlap [OPTIONS] <zone-a> <zone-b>

With no zone arguments, an interactive picker offers a curated list of
major timezones. Zones given on the command line may be any IANA
identifier, e.g. America/New_York.

Options:
  --date <YYYY-MM-DD>        Reference date for offset resolution.
                             Default: today.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success (including quitting the picker).
  1  Internal error.
  2  Invalid arguments or unrecognized timezone.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
