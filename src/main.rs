// SPDX-License-Identifier: MPL-2.0
use alert_stack::app::{self, Flags};

fn main() -> iced::Result {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("unused arguments: {remaining:?}");
    }

    app::run(flags)
}
