// SPDX-License-Identifier: MPL-2.0
use bannerboard::app::{self, paths, Flags};

const HELP: &str = "\
Bannerboard - banner administration and public slider

USAGE:
  bannerboard [OPTIONS]

OPTIONS:
  --lang <pt|en|es>     Interface language
  --admin               Start on the admin panel
  --demo                Use an in-memory store with sample banners
  --config-dir <PATH>   Directory holding settings.toml
  --data-dir <PATH>     Directory holding application state
  -h, --help            Print this help

ENVIRONMENT:
  BANNERBOARD_STORE_URL   Base URL of the hosted store
  BANNERBOARD_STORE_KEY   Anonymous API key of the hosted store
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        admin: args.contains("--admin"),
        demo: args.contains("--demo"),
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
