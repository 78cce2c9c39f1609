// SPDX-License-Identifier: MPL-2.0
use gadantic_ui::app::{self, paths, Flags};
use gadantic_ui::crop::Crop;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: gadantic_ui [OPTIONS]

Options:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  --crop <ID>            Crop to select on startup (e.g. napa-cabbage)
  -h, --help             Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gadantic_ui=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_arg(&mut args, "--lang"),
        config_dir: opt_arg(&mut args, "--config-dir"),
        crop: opt_arg::<String>(&mut args, "--crop").and_then(|id| match id.parse::<Crop>() {
            Ok(crop) => Some(crop),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring --crop");
                None
            }
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn opt_arg<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, "invalid {key} value");
            None
        }
    }
}
