//! Startup configuration: CLI flags, optionally layered over a TOML file.
//!
//! Precedence: CLI flag > config file > built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::core::error::{ContestError, Result};

#[derive(Debug, Clone, Parser)]
#[command(name = "the-contest")]
#[command(about = "Count up to 15 and win")]
pub struct CliArgs {
    #[arg(long, help = "TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Where the score is kept between launches")]
    pub state_file: Option<PathBuf>,

    #[arg(long, help = "Play this sound file instead of the built-in fanfare")]
    pub sound: Option<PathBuf>,

    #[arg(long, help = "Never play the victory sound")]
    pub mute: bool,

    #[arg(long, help = "Ignore any saved score and start at 0")]
    pub fresh: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Keys accepted in the config file. All optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub state_file: Option<PathBuf>,
    pub sound: Option<PathBuf>,
    pub mute: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| ContestError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved settings the GUI boots from.
#[derive(Debug, Clone, PartialEq)]
pub struct ContestConfig {
    pub state_file: PathBuf,
    pub sound: Option<PathBuf>,
    pub mute: bool,
    pub fresh: bool,
}

impl ContestConfig {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    fn merge(args: CliArgs, file: FileConfig) -> Self {
        Self {
            state_file: args
                .state_file
                .or(file.state_file)
                .unwrap_or_else(default_state_file),
            sound: args.sound.or(file.sound),
            mute: args.mute || file.mute.unwrap_or(false),
            fresh: args.fresh,
        }
    }
}

/// Temp dir, so the OS is free to throw it away.
pub fn default_state_file() -> PathBuf {
    std::env::temp_dir().join("the-contest").join("state.json")
}
