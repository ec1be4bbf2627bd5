// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [DIRECTORY]

Shows the images in DIRECTORY (defaults to the current directory).

Options:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <PATH>   Directory holding settings.toml
  -h, --help            Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let directory = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        config_dir,
        directory,
    })
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,iced_gallery=info"),
    )
    .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
