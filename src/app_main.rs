use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::filter::threshold::ThresholdFilter;
use thiserror::Error;
use winhandle::win32::window::window_snapshot::WindowSnapshot;
use winhandle::win32::window::window_tree::WindowTree;
use winhandle::{NativeApi, OnError, WindowError, WindowRef};

use crate::app::cli_args::CliArgs;
use crate::app::configs::{AppConfig, Listing};
use crate::app::window_filter::WindowFilter;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error("invalid filter: {0}")]
    Filter(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("no foreground window")]
    NoForeground,
    #[error("window {0} does not exist")]
    NoWindow(winhandle::WindowHandle),
}

pub fn main() {
    let args = CliArgs::parse();

    init_logger(
        args.is_file_all_enabled(),
        args.is_file_error_enabled(),
        args.get_log_level(),
    );

    let cfg_file = args.config_path.clone().unwrap_or_else(default_config_path);
    let config = AppConfig::load(&cfg_file)
        .inspect_err(|e| log::error!("Can't read config file {}: {}", cfg_file.display(), e))
        .unwrap_or_default();

    if let Err(e) = start_app(&args, &config) {
        match &e {
            RunError::Window(window_error) => log::log!(window_error.get_log_level(), "{}", e),
            _ => log::error!("{}", e),
        }
        std::process::exit(1);
    }
}

#[cfg(windows)]
fn start_app(args: &CliArgs, config: &AppConfig) -> Result<(), RunError> {
    let api = winhandle::win32::api::win32_api::Win32Api;
    let stdout = std::io::stdout();
    run(&api, args, config, &mut stdout.lock())
}

#[cfg(not(windows))]
fn start_app(_args: &CliArgs, _config: &AppConfig) -> Result<(), RunError> {
    log::error!("wintree needs the Win32 window manager and only runs on Windows");
    std::process::exit(1);
}

fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".config").join("wintree"))
        .unwrap_or_default()
        .join("wintree.toml")
}

pub fn run<A: NativeApi + ?Sized, W: Write>(
    api: &A,
    args: &CliArgs,
    config: &AppConfig,
    out: &mut W,
) -> Result<(), RunError> {
    let listing = &config.listing;
    let on_error = if listing.lenient { OnError::Ignore } else { OnError::Fail };
    let filter = WindowFilter::from_config(&config.filters)?;
    if !filter.is_empty() {
        log::debug!("Listing filtered by {:?}", filter);
    }

    let root = if let Some(hwnd) = args.root {
        WindowRef::new(api, hwnd)
    } else if args.foreground {
        let hwnd = winhandle::win32::api::window::get_foreground_window(api).ok_or(RunError::NoForeground)?;
        WindowRef::new(api, hwnd)
    } else {
        WindowRef::desktop(api)
    };
    let root = root.with_policy(on_error);

    if !root.exists() {
        return Err(RunError::NoWindow(root.handle()));
    }

    let max_depth = args.depth.or(listing.max_depth);
    log::debug!("Listing {} (recursive: {}, max depth: {:?})", root.handle(), args.recursive, max_depth);

    let tree = if args.recursive {
        WindowTree::flat(root, |s| filter.matches(s))?
    } else {
        WindowTree::build(root, max_depth, |s| filter.matches(s))?
    };

    out.write_all(tree.render(&listing.indent, |s| format_line(s, listing)).as_bytes())?;
    log::info!("{} windows listed", tree.len());
    Ok(())
}

fn format_line(snapshot: &WindowSnapshot, listing: &Listing) -> String {
    let mut line = snapshot.hwnd.to_string();
    if listing.show_classes {
        line.push_str(&format!(" [{}]", snapshot.class_name.as_deref().unwrap_or("/")));
    }
    if listing.show_titles {
        if let Some(title) = &snapshot.title {
            line.push_str(&format!(" {:?}", title));
        }
    }
    if listing.show_styles {
        line.push_str(&format!(" {{{}}}", snapshot.flag_names().join(", ")));
    }
    line
}

fn init_logger(file_all: bool, file_errors: bool, level: log::LevelFilter) {
    let pattern = PatternEncoder::new("{h({d(%Y-%m-%d %H:%M:%S)} {({l}):5.5} {f}:{L})}: {m}{n}");
    let console: ConsoleAppender = ConsoleAppender::builder()
        .target(log4rs::append::console::Target::Stderr)
        .encoder(Box::new(pattern.clone()))
        .build();

    const FILE_SIZE: u64 = 10 * 1024 * 1024; // INFO: 10 MB
    const NUM_FILES: u32 = 3;

    let mut config_builder =
        log4rs::config::Config::builder().appender(Appender::builder().build("console", Box::new(console)));
    let mut root_builder = Root::builder().appender("console");

    if file_all {
        match rolling_appender("wintree", FILE_SIZE, NUM_FILES, &pattern) {
            Ok(appender) => {
                config_builder = config_builder.appender(Appender::builder().build("file_all", Box::new(appender)));
                root_builder = root_builder.appender("file_all");
            }
            Err(e) => eprintln!("Can't create log file: {e}"),
        }
    }

    if file_errors {
        match rolling_appender("errors", FILE_SIZE, NUM_FILES, &pattern) {
            Ok(appender) => {
                config_builder = config_builder.appender(
                    Appender::builder()
                        .filter(Box::new(ThresholdFilter::new(LevelFilter::Error)))
                        .build("file_errors", Box::new(appender)),
                );
                root_builder = root_builder.appender("file_errors");
            }
            Err(e) => eprintln!("Can't create error log file: {e}"),
        }
    }

    match config_builder.build(root_builder.build(level)) {
        Ok(config) => drop(log4rs::init_config(config)),
        Err(e) => eprintln!("Invalid logger configuration: {e}"),
    }

    log_panics::init();
}

fn rolling_appender(
    name: &str,
    file_size: u64,
    num_files: u32,
    pattern: &PatternEncoder,
) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    let policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(file_size)),
        Box::new(FixedWindowRoller::builder().build(&format!("./logs/{name}.{{}}.gz"), num_files)?),
    );
    Ok(RollingFileAppender::builder()
        .encoder(Box::new(pattern.clone()))
        .build(format!("./logs/{name}.log"), Box::new(policy))?)
}
