// SPDX-License-Identifier: MPL-2.0
//! Command line parsing for the demo binary.

use crate::app::Flags;
use std::ffi::OsString;

pub const HELP: &str = "\
iced_banner: dismissible banner notifications demo

USAGE:
  iced_banner [OPTIONS]

OPTIONS:
  --lang <CODE>         UI language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  --duration <SECS>     Banner animation duration for this run
  -h, --help            Print this help

ENVIRONMENT:
  ICED_BANNER_CONFIG_DIR   Same as --config-dir
  RUST_LOG                 Log filter (default: iced_banner=info)
";

/// What the binary was asked to do.
#[derive(Debug)]
pub enum Command {
    Help,
    Run(Flags),
}

/// Parses the process arguments.
pub fn parse_env() -> Result<Command, pico_args::Error> {
    parse(std::env::args_os().skip(1).collect())
}

pub fn parse(args: Vec<OsString>) -> Result<Command, pico_args::Error> {
    let mut args = pico_args::Arguments::from_vec(args);

    if args.contains(["-h", "--help"]) {
        return Ok(Command::Help);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        duration_secs: args.opt_value_from_str("--duration")?,
    };

    let remaining = args.finish();
    if let Some(unexpected) = remaining.into_iter().next() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {}", unexpected.to_string_lossy()),
        });
    }

    Ok(Command::Run(flags))
}
