use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lux")]
#[command(about = "Whitted-style CPU ray tracer")]
pub struct Args {
    /// Render config file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Scene graph file
    #[arg(short, long, default_value = "scene.json")]
    pub graph: PathBuf,

    /// Output image (.pfm or .exr), overrides the config's output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["lux"]);
        assert_eq!(args.config, PathBuf::from("config.json"));
        assert_eq!(args.graph, PathBuf::from("scene.json"));
        assert!(args.output.is_none());
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Info);
        assert!(args.threads.is_none());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from(["lux", "-c", "a.json", "--graph", "b.json", "-o", "out.exr", "--log-level", "debug", "-j", "3"]);
        assert_eq!(args.config, PathBuf::from("a.json"));
        assert_eq!(args.graph, PathBuf::from("b.json"));
        assert_eq!(args.output, Some(PathBuf::from("out.exr")));
        assert_eq!(LevelFilter::from(args.log_level), LevelFilter::Debug);
        assert_eq!(args.threads, Some(3));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(Args::try_parse_from(["lux", "--log-level", "loud"]).is_err());
    }
}
