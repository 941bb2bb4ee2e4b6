// SPDX-License-Identifier: MPL-2.0
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use zs_tool::app::{self, paths, Flags};

const HELP: &str = "\
ZS Tool

USAGE:
  zs_tool [OPTIONS] [PATH]

OPTIONS:
  --lang <LOCALE>       Override the UI language (e.g. en-US, fr)
  --config-dir <DIR>    Override the configuration directory
  --data-dir <DIR>      Override the data directory
  -h, --help            Print this help and exit

ARGS:
  [PATH]                File or folder to preload on startup
";

fn parse_args() -> Result<Flags, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: pargs.opt_value_from_str("--lang")?,
        config_dir: pargs.opt_value_from_str("--config-dir")?,
        data_dir: pargs.opt_value_from_str("--data-dir")?,
        path: pargs.opt_free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments: {remaining:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    let flags = match parse_args() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error parsing arguments: {err}");
            std::process::exit(1);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
