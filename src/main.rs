// SPDX-License-Identifier: MPL-2.0
use bibliosena::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
BIBLIOSENA desktop client

USAGE:
  bibliosena [OPTIONS]

OPTIONS:
  -h, --help             Print this help
  --lang <ID>            Interface language (es, en-US, or system)
  --api-url <URL>        Base URL of the BIBLIOSENA service
  --data-dir <DIR>       Directory for the local key/value store
  --config-dir <DIR>     Directory holding settings.toml

ENVIRONMENT:
  BIBLIOSENA_DATA_DIR    Same as --data-dir
  BIBLIOSENA_CONFIG_DIR  Same as --config-dir
  RUST_LOG               Log filter (e.g. bibliosena=debug)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
