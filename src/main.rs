//! `keydig`: dig a keypath out of a JSON document.
//!
//! # Usage
//!
//! ```text
//! keydig [--config <path>] [--default <json>] [--pretty] <keypath> [file]
//!
//! Arguments:
//!   <keypath>   JSON array of member names and indices, e.g. '[2,"commit","author"]'
//!   [file]      JSON document to read (default: stdin, or "-")
//!
//! Flags:
//!   --config,  -c <path>   config file (default: $KEYDIG_CONFIG, then ./keydig.toml)
//!   --default, -d <json>   value to report when the keypath does not resolve
//!   --pretty,  -p          pretty-print the output
//!   --help,    -h          print this help
//! ```
//!
//! Prints `{"found": <bool>, "value": <json>}` on stdout.
//! Exits 0 when found, 1 when not found, 2 on any error.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config
//!   3. Init logger at configured level
//!   4. Decode source, dig, print

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use keydig::config::{self, Config};
use keydig::{AppError, dig, logger, parse_keypath, source};
use serde_json::Value;
use tracing::debug;

const EXIT_FOUND: i32 = 0;
const EXIT_MISSING: i32 = 1;
const EXIT_ERROR: i32 = 2;

// ── CLI arg parsing ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    default: Option<String>,
    pretty: bool,
    help: bool,
    keypath: Option<String>,
    file: Option<String>,
}

fn parse_args<I: IntoIterator<Item = String>>(argv: I) -> Result<Args, AppError> {
    let mut args = Args::default();
    let mut iter = argv.into_iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter.next().ok_or_else(|| usage("--config needs a path"))?;
                args.config = Some(PathBuf::from(path));
            }
            "--default" | "-d" => {
                args.default = Some(iter.next().ok_or_else(|| usage("--default needs a value"))?);
            }
            "--pretty" | "-p" => args.pretty = true,
            "--help" | "-h" => {
                args.help = true;
                return Ok(args);
            }
            "--" => {
                for rest in iter.by_ref() {
                    push_positional(&mut args, rest)?;
                }
            }
            // A keypath always starts with `[`; "-" alone means stdin.
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(usage(&format!("unknown flag '{flag}'")));
            }
            _ => push_positional(&mut args, arg)?,
        }
    }

    Ok(args)
}

fn push_positional(args: &mut Args, arg: String) -> Result<(), AppError> {
    if args.keypath.is_none() {
        args.keypath = Some(arg);
    } else if args.file.is_none() {
        args.file = Some(arg);
    } else {
        return Err(usage(&format!("unexpected argument '{arg}'")));
    }
    Ok(())
}

fn usage(msg: &str) -> AppError {
    AppError::Usage(msg.to_string())
}

fn print_help() {
    eprintln!("usage: keydig [--config <path>] [--default <json>] [--pretty] <keypath> [file]");
    eprintln!();
    eprintln!("arguments:");
    eprintln!("  <keypath>   JSON array of member names and indices, e.g. '[2,\"commit\"]'");
    eprintln!("  [file]      JSON document to read (default: stdin)");
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --config,  -c <path>   config file");
    eprintln!("  --default, -d <json>   value reported on a miss");
    eprintln!("  --pretty,  -p          pretty-print output");
    eprintln!("  --help,    -h          print this help");
}

// ── main ───────────────────────────────────────────────────────────────────

fn main() {
    let result = run();
    if let Err(e) = &result {
        eprintln!("error: {e}");
    }
    process::exit(exit_code(&result));
}

fn exit_code(result: &Result<bool, AppError>) -> i32 {
    match result {
        Ok(true) => EXIT_FOUND,
        Ok(false) => EXIT_MISSING,
        Err(_) => EXIT_ERROR,
    }
}

fn run() -> Result<bool, AppError> {
    // .env is optional.
    let _ = dotenvy::dotenv();

    let args = parse_args(std::env::args().skip(1))?;
    if args.help {
        print_help();
        return Ok(true);
    }

    let cfg = match &args.config {
        Some(path) => {
            let log_level_override = std::env::var("KEYDIG_LOG_LEVEL").ok();
            config::load_with(Some(path.as_path()), log_level_override.as_deref())?
        }
        None => config::load()?,
    };

    logger::init(&cfg.log_level)?;

    run_with(&args, &cfg, io::stdin().lock(), &mut io::stdout().lock())
}

/// Dig once and write the result line. Returns whether the keypath resolved.
fn run_with<R: Read, W: Write>(
    args: &Args,
    cfg: &Config,
    stdin: R,
    out: &mut W,
) -> Result<bool, AppError> {
    let keypath_text = args
        .keypath
        .as_deref()
        .ok_or_else(|| usage("missing <keypath>"))?;
    let keypath = parse_keypath(keypath_text)?;

    // The command line wins over the config file.
    let default = match args.default.as_deref() {
        Some(text) => Some(
            serde_json::from_str::<Value>(text)
                .map_err(|e| usage(&format!("--default is not valid JSON: {e}")))?,
        ),
        None => cfg.default_value.clone(),
    };

    let document = match args.file.as_deref() {
        None | Some("-") => source::load_reader(stdin)?,
        Some(path) => source::load_path(Path::new(path))?,
    };

    let dug = dig(&keypath, &document, default);
    debug!(found = dug.found, keys = keypath.len(), "dig complete");

    if cfg.pretty || args.pretty {
        serde_json::to_writer_pretty(&mut *out, &dug)?;
    } else {
        serde_json::to_writer(&mut *out, &dug)?;
    }
    writeln!(out)?;

    Ok(dug.found)
}
