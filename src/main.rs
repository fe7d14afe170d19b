//! The CLI interface for displix
//!
//! Without options every online display is listed with its modes. Use the `--help` flag to see the
//! available options.
use color_eyre::eyre::Result;
use displix::DisplayListScope;
use structopt::{StructOpt, clap::AppSettings};

/// CLI arguments
#[derive(StructOpt, Debug)]
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
#[structopt(
    name = "displix",
    about = "Lists the modes of connected displays and switches the mode of one of them.",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opts {
    /// Include duplicate low resolution modes
    #[structopt(short = "a")]
    all_modes: bool,
    /// Index of the display to select (defaults to the main display)
    #[structopt(short = "d", value_name = "index")]
    display: Option<i64>,
    /// Index of the mode to apply to the selected display; lists the modes when omitted
    #[structopt(short = "m", value_name = "index")]
    mode: Option<i64>,
    /// Which displays to enumerate: `online` or `active`
    #[structopt(long, default_value = "online")]
    scope: DisplayListScope,
    /// Output debug info
    #[structopt(short, long)]
    verbose: bool,
}

/// Entry point for `displix`.
fn main() -> Result<()> {
    let _ = color_eyre::install()?;

    let opts = Opts::from_args();

    let log_level = if opts.verbose {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level.as_str()),
    )
    .init();

    log::debug!("Parsed Opts:\n{:#?}", opts);

    list_or_apply(&opts)
}

#[cfg(target_os = "macos")]
fn list_or_apply(opts: &Opts) -> Result<()> {
    use displix::{CoreGraphicsBackend, Outcome, Settings, query_displays, run};

    let display_set = query_displays(CoreGraphicsBackend::new(), opts.scope)?;
    log::debug!("Discovered displays: {}", display_set);

    let settings = Settings::resolve(&display_set, opts.all_modes, opts.display, opts.mode);
    log::debug!("Resolved settings: {:?}", settings);

    let stdout = std::io::stdout();
    match run(&mut stdout.lock(), &display_set, &settings)? {
        Outcome::Listed => log::debug!("Listed display modes"),
        Outcome::Applied(index) => log::debug!("Applied mode {}", index),
        Outcome::ApplyFailed(err) => log::debug!("Mode change failed: {:?}", err),
    }

    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn list_or_apply(_opts: &Opts) -> Result<()> {
    Err(color_eyre::eyre::eyre!(
        "displix needs the CoreGraphics display services and only runs on macOS"
    ))
}
