use std::path::PathBuf;

use clap::Parser;
use winhandle::WindowHandle;

fn valid_log_type(l: &str) -> Result<u8, String> {
    const ERROR_MSG: &str = "LOG_TYPE must be 0 (no log file), 1 (error log file) or 2 (all log files)";
    let log_type = l.parse::<u8>().map_err(|_| ERROR_MSG)?;
    if log_type <= 2 {
        Ok(log_type)
    } else {
        Err(ERROR_MSG.to_owned())
    }
}

fn valid_log_level(l: &str) -> Result<u8, String> {
    const ERROR_MSG: &str = "LOGLEVEL must be 0 (off), 1 (trace), 2 (debug), 3 (info), 4 (warn) or 5 (error)";
    let log_level = l.parse::<u8>().map_err(|_| ERROR_MSG)?;
    if log_level <= 5 {
        Ok(log_level)
    } else {
        Err(ERROR_MSG.to_owned())
    }
}

fn valid_handle(h: &str) -> Result<WindowHandle, String> {
    WindowHandle::parse(h).ok_or_else(|| format!("'{h}' is not a decimal or 0x-prefixed hexadecimal handle"))
}

/// Prints the window tree rooted at the desktop
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    #[arg(long = "config", help = "Configuration file (default: ~/.config/wintree/wintree.toml)")]
    pub config_path: Option<PathBuf>,

    #[arg(id = "LOG_TYPE", long = "log", help = "Can be 0 (no log file is created), 1 (error log file is created) or 2 (all log files are created)", value_parser = valid_log_type, default_value_t = 0)]
    log_enabled: u8,

    #[arg(long = "loglevel", help = "Can be 0 (off), 1 (trace), 2 (debug), 3 (info), 4 (warn) or 5 (error)", value_parser = valid_log_level, default_value_t = 3)]
    log_level: u8,

    #[arg(long = "root", help = "Handle of the root window", value_parser = valid_handle, conflicts_with = "foreground")]
    pub root: Option<WindowHandle>,

    #[arg(long = "foreground", help = "Use the foreground window as root", default_value_t = false)]
    pub foreground: bool,

    #[arg(long = "recursive", help = "List all descendants flat instead of as a tree", default_value_t = false)]
    pub recursive: bool,

    #[arg(long = "depth", help = "Maximum depth below the root")]
    pub depth: Option<usize>,
}

impl CliArgs {
    pub fn is_file_all_enabled(&self) -> bool {
        self.log_enabled == 2
    }

    pub fn is_file_error_enabled(&self) -> bool {
        self.log_enabled >= 1
    }

    pub fn get_log_level(&self) -> log::LevelFilter {
        match self.log_level {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Trace,
            2 => log::LevelFilter::Debug,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Warn,
            5 => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        }
    }
}
