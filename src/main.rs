// SPDX-License-Identifier: MPL-2.0
use toast_notify::app::{self, Flags};

const HELP: &str = "\
toast_notify - toast notification demo

USAGE:
  toast_notify [OPTIONS]

OPTIONS:
  --message <TEXT>    Show a toast on startup
  --kind <KIND>       Toast kind (info, success, warning, error, ...)
  --timeout <MS>      Display time in milliseconds before fading
  --config <PATH>     Settings file to use instead of the per-user one
  -v, --verbose       Log lifecycle transitions
  -h, --help          Print this help
";

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        message: args.opt_value_from_str("--message")?,
        kind: args.opt_value_from_str("--kind")?,
        timeout_ms: args.opt_value_from_str("--timeout")?,
        config_path: args.opt_value_from_str("--config")?,
    })
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    app::run(flags)
}
