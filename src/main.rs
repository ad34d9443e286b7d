// SPDX-License-Identifier: MPL-2.0
use capture_viewer::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "capture_viewer=info";

const HELP: &str = "\
Usage: capture_viewer [OPTIONS] [DIRECTORY]

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --data-dir <DIR>      Directory for application data
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: option_arg(&mut args, "--lang"),
        config_dir: option_arg(&mut args, "--config-dir"),
        data_dir: option_arg(&mut args, "--data-dir"),
        directory: args
            .finish()
            .into_iter()
            .next()
            .map(PathBuf::from),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting capture viewer");
    app::run(flags)
}

/// Reads `--name value`; a malformed value is logged and ignored.
fn option_arg(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, option = name, "ignoring invalid command line option");
            None
        }
    }
}
