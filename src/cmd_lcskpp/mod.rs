pub mod align;
pub mod matches;

/// Installs the logger. Warnings by default, each `-v` one level more.
pub fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

pub fn verbose_arg() -> clap::Arg {
    clap::Arg::new("verbose")
        .long("verbose")
        .short('v')
        .action(clap::ArgAction::Count)
        .help("Print runtime information, repeat for more")
}
